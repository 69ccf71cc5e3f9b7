use nalgebra::{Vector2, Vector3};

// ---------------------------------------------------------------------------
// Rocket and ground mesh construction
// ---------------------------------------------------------------------------
//
// Plain mesh data, renderer-agnostic. The assembly is a composition of
// parts — nothing here inherits from or depends on a rendering library;
// a presenter uploads the buffers and applies the transforms the driver
// pushes across the ScenePresenter seam.

/// Triangle mesh: positions plus index triples.
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Vec<Vector3<f64>>,
    pub indices: Vec<[u32; 3]>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Translate every vertex, baking a part's offset into its buffer.
    fn translated(mut self, offset: Vector3<f64>) -> Self {
        for p in &mut self.positions {
            *p += offset;
        }
        self
    }
}

/// Revolve a 2D profile of `(radius, height)` points around the vertical
/// axis. Open surface: no caps, matching a lathe.
pub fn lathe(profile: &[Vector2<f64>], segments: u32) -> MeshData {
    let mut positions = Vec::with_capacity(profile.len() * segments as usize);
    for j in 0..segments {
        let angle = std::f64::consts::TAU * f64::from(j) / f64::from(segments);
        let (sin, cos) = angle.sin_cos();
        for p in profile {
            positions.push(Vector3::new(p.x * cos, p.y, p.x * sin));
        }
    }

    let ring = profile.len() as u32;
    let mut indices = Vec::new();
    for j in 0..segments {
        let a = j * ring;
        let b = ((j + 1) % segments) * ring;
        for i in 0..ring - 1 {
            indices.push([a + i, a + i + 1, b + i]);
            indices.push([a + i + 1, b + i + 1, b + i]);
        }
    }

    MeshData { positions, indices }
}

/// Open cylinder as a two-point lathe profile.
pub fn cylinder(radius: f64, height: f64, segments: u32) -> MeshData {
    let profile = [
        Vector2::new(radius, -height / 2.0),
        Vector2::new(radius, height / 2.0),
    ];
    lathe(&profile, segments)
}

/// Elliptical nose-cone profile: radius grows from the tip while height
/// falls to the body joint.
pub fn nose_profile() -> Vec<Vector2<f64>> {
    (0..50)
        .map(|i| {
            let t = f64::from(i) * 0.01;
            let r = 0.102 * t;
            let y = 0.1 * (12.0 * (1.0 - (t + 0.5_f64).powi(2))).sqrt();
            Vector2::new(r, y)
        })
        .collect()
}

/// One trapezoidal fin at `angle` radians around the body: two triangles
/// spanning root radius to root-plus-span.
fn fin(angle: f64, root_radius: f64, span: f64, base_len: f64, tip_len: f64) -> MeshData {
    let (sin, cos) = angle.sin_cos();
    let inner = root_radius;
    let outer = root_radius + span;
    let positions = vec![
        Vector3::new(inner * cos, 0.0, inner * sin),
        Vector3::new(inner * cos, base_len, inner * sin),
        Vector3::new(outer * cos, tip_len, outer * sin),
        Vector3::new(outer * cos, 0.0, outer * sin),
    ];
    let indices = vec![[0, 1, 3], [1, 2, 3]];
    MeshData { positions, indices }
}

/// Square ground quad seated just below y = 0 so the rocket base never
/// z-fights with it.
pub fn ground_plane(extent: f64) -> MeshData {
    let h = extent / 2.0;
    let y = -0.01;
    let positions = vec![
        Vector3::new(-h, y, -h),
        Vector3::new(h, y, -h),
        Vector3::new(h, y, h),
        Vector3::new(-h, y, h),
    ];
    let indices = vec![[0, 1, 2], [0, 2, 3]];
    MeshData { positions, indices }
}

// ---------------------------------------------------------------------------
// The assembled vehicle
// ---------------------------------------------------------------------------

pub const BODY_RADIUS: f64 = 0.05;
pub const BODY_HEIGHT: f64 = 1.0;
pub const FIN_COUNT: usize = 4;
pub const FIN_SPAN: f64 = 0.05;
pub const FIN_BASE_LEN: f64 = 0.2;
pub const FIN_TIP_LEN: f64 = 0.05;
const RADIAL_SEGMENTS: u32 = 64;

/// The rocket's parts with their pad-relative offsets baked in: nose cone
/// seated on the body, body standing on y = 0, fins at the base.
#[derive(Debug, Clone)]
pub struct RocketAssembly {
    pub nose: MeshData,
    pub body: MeshData,
    pub fins: Vec<MeshData>,
}

impl RocketAssembly {
    pub fn standard() -> Self {
        let nose = lathe(&nose_profile(), RADIAL_SEGMENTS)
            .translated(Vector3::new(0.0, 0.95, 0.0));
        let body = cylinder(BODY_RADIUS, BODY_HEIGHT, RADIAL_SEGMENTS)
            .translated(Vector3::new(0.0, BODY_HEIGHT / 2.0, 0.0));

        let spacing = std::f64::consts::TAU / FIN_COUNT as f64;
        let fins = (0..FIN_COUNT)
            .map(|n| {
                fin(
                    spacing * n as f64,
                    BODY_RADIUS,
                    FIN_SPAN,
                    FIN_BASE_LEN,
                    FIN_TIP_LEN,
                )
            })
            .collect();

        Self { nose, body, fins }
    }

    /// Right-half silhouette of nose and body in the x/y plane, tip down
    /// to base, for 2D side-profile rendering.
    pub fn silhouette(&self) -> Vec<Vector2<f64>> {
        let mut outline: Vec<Vector2<f64>> = nose_profile()
            .into_iter()
            .map(|p| Vector2::new(p.x, 0.95 + p.y))
            .collect();
        outline.push(Vector2::new(BODY_RADIUS, BODY_HEIGHT));
        outline.push(Vector2::new(BODY_RADIUS, 0.0));
        outline.push(Vector2::new(0.0, 0.0));
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lathe_closes_the_revolution() {
        let profile = [Vector2::new(1.0, 0.0), Vector2::new(1.0, 2.0)];
        let mesh = lathe(&profile, 8);
        assert_eq!(mesh.positions.len(), 16);
        // 8 segments x 1 band x 2 triangles, wrapping back to segment 0.
        assert_eq!(mesh.triangle_count(), 16);
        let max_index = mesh.indices.iter().flatten().copied().max().unwrap();
        assert!((max_index as usize) < mesh.positions.len());
    }

    #[test]
    fn nose_profile_spans_tip_to_joint() {
        let profile = nose_profile();
        assert_eq!(profile.len(), 50);
        assert_eq!(profile[0].x, 0.0);
        // Height falls monotonically from 0.3 toward the body joint.
        assert!((profile[0].y - 0.3).abs() < 1e-9);
        for pair in profile.windows(2) {
            assert!(pair[1].y < pair[0].y);
            assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn assembly_has_four_two_triangle_fins() {
        let assembly = RocketAssembly::standard();
        assert_eq!(assembly.fins.len(), FIN_COUNT);
        for fin in &assembly.fins {
            assert_eq!(fin.positions.len(), 4);
            assert_eq!(fin.triangle_count(), 2);
        }
    }

    #[test]
    fn body_stands_on_the_pad() {
        let assembly = RocketAssembly::standard();
        let min_y = assembly
            .body
            .positions
            .iter()
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min);
        assert!((min_y - 0.0).abs() < 1e-12);
    }

    #[test]
    fn ground_sits_below_zero() {
        let ground = ground_plane(20_000.0);
        assert!(ground.positions.iter().all(|p| p.y < 0.0));
        assert_eq!(ground.triangle_count(), 2);
    }

    #[test]
    fn silhouette_starts_at_tip_and_ends_at_base() {
        let outline = RocketAssembly::standard().silhouette();
        let tip = outline.first().unwrap();
        assert_eq!(tip.x, 0.0);
        assert!((tip.y - 1.25).abs() < 1e-9, "nose tip at 0.95 + 0.3");
        assert_eq!(outline.last().unwrap().y, 0.0);
    }
}

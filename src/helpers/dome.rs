use bevy::math::Vec3;

/// Radius of the sky dome every celestial object sits on.
pub const DOME_RADIUS: f32 = 50.0;

/// Point on a sphere of the given radius from spherical angles: `theta` is
/// the azimuth around Y, `phi` the polar angle measured from +Y (so phi 0
/// is the zenith, phi π/2 the horizon).
///
/// Sampling both angles uniformly clusters points near the poles; the sky
/// dome keeps that on purpose for a denser patch overhead.
pub fn dome_point(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

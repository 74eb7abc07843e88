//! Color interpolation and gradients

use crate::rgb::Rgb;

/// Three-component vector, typically RGB channels on the 0-255 scale
pub type Vec3 = [f32; 3];

/// Component-wise linear interpolation: `a + t * (b - a)`
pub fn lerp3(t: f32, a: Vec3, b: Vec3) -> Vec3 {
    std::array::from_fn(|i| a[i] + t * (b[i] - a[i]))
}

/// `n` evenly spaced colors from `a` to `b`, both ends included
pub fn linear_gradient(n: usize, a: Vec3, b: Vec3) -> Vec<Vec3> {
    gradient(|t| t, n, a, b)
}

/// `n` colors from `a` to `b`, spaced by an ease function.
///
/// Sample `i` is `lerp3(ease(i / (n - 1)), a, b)`. A single sample sits at
/// progress 0 and zero samples produce an empty gradient.
pub fn gradient<F>(ease: F, n: usize, a: Vec3, b: Vec3) -> Vec<Vec3>
where
    F: Fn(f32) -> f32,
{
    match n {
        0 => Vec::new(),
        1 => vec![lerp3(ease(0.0), a, b)],
        _ => {
            let last = (n - 1) as f32;
            (0..n)
                .map(|i| lerp3(ease(i as f32 / last), a, b))
                .collect()
        }
    }
}

/// [`gradient`] over 8-bit colors, rounding each sample
pub fn rgb_gradient<F>(ease: F, n: usize, a: Rgb, b: Rgb) -> Vec<Rgb>
where
    F: Fn(f32) -> f32,
{
    gradient(ease, n, a.to_vec3(), b.to_vec3())
        .into_iter()
        .map(Rgb::from_channels)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Vec3 = [0.0, 0.0, 0.0];
    const WHITE: Vec3 = [255.0, 255.0, 255.0];

    #[test]
    fn test_lerp3_endpoints() {
        assert_eq!(lerp3(0.0, BLACK, WHITE), BLACK);
        assert_eq!(lerp3(0.5, BLACK, WHITE), [127.5, 127.5, 127.5]);
        assert_eq!(lerp3(1.0, BLACK, WHITE), WHITE);
    }

    #[test]
    fn test_degenerate_gradients() {
        assert!(linear_gradient(0, BLACK, WHITE).is_empty());
        assert_eq!(linear_gradient(1, BLACK, WHITE), vec![BLACK]);
        assert_eq!(linear_gradient(2, BLACK, WHITE), vec![BLACK, WHITE]);
    }

    #[test]
    fn test_rgb_gradient_rounds() {
        let steps = rgb_gradient(|t| t, 3, Rgb::BLACK, Rgb::WHITE);
        assert_eq!(
            steps,
            vec![Rgb::BLACK, Rgb::new(128, 128, 128), Rgb::WHITE]
        );
    }
}

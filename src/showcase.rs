//! Built-in demo plots: the Gaussian shown by `--help` and the sine-wave
//! tour printed by `--showcase`.

use crate::{
    core::{config::RenderConfig, error::GraphError},
    render::Renderer,
};

/// Standard normal density (sigma = 3) sampled at 21 points.
pub const GAUSSIAN: [f64; 21] = [
    0.000_514_092_998_764,
    0.001_477_282_803_98,
    0.003_798_662_007_93,
    0.008_740_629_697_9,
    0.017_996_988_837_7,
    0.033_159_046_264_2,
    0.054_670_024_892,
    0.080_656_908_173,
    0.106_482_668_507,
    0.125_794_409_231,
    0.132_980_760_134,
    0.125_794_409_231,
    0.106_482_668_507,
    0.080_656_908_173,
    0.054_670_024_892,
    0.033_159_046_264_2,
    0.017_996_988_837_7,
    0.008_740_629_697_9,
    0.003_798_662_007_93,
    0.001_477_282_803_98,
    0.000_514_092_998_764,
];

#[must_use]
pub fn gaussian_config() -> RenderConfig {
    RenderConfig {
        rows: 3,
        draw_box: true,
        color: false,
        title: "Gaussian".to_owned(),
        min: Some(0.0),
        max: Some(0.15),
        ..RenderConfig::default()
    }
}

pub fn gaussian(renderer: &Renderer) -> Result<String, GraphError> {
    renderer.render(&GAUSSIAN, &gaussian_config())
}

/// Two full cycles of a sine wave, 101 samples.
#[must_use]
pub fn sine_wave() -> Vec<f64> {
    (0..=100)
        .map(|i| (f64::from(i) * 7.2).to_radians().sin())
        .collect()
}

const BANNER: &str = "
############################################################
#                Sparklines: Showcase examples             #
############################################################

";

/// Caption printed above a plot (bare plots have no title bar) and its config.
fn tour() -> Vec<(Option<&'static str>, RenderConfig)> {
    let boxed = |rows, columns, title: &str| RenderConfig {
        rows,
        columns,
        draw_box: true,
        title: title.to_owned(),
        ..RenderConfig::default()
    };
    let bare = |rows, columns| RenderConfig {
        rows,
        columns,
        ..RenderConfig::default()
    };
    let ranged = |low, high, title: &str| RenderConfig {
        min: Some(low),
        max: Some(high),
        ..boxed(10, 80, title)
    };

    vec![
        (None, boxed(10, 40, "Showcase: With box, size 40x10")),
        (None, boxed(3, 40, "Showcase: With box, size 40x3")),
        (
            Some("Showcase: Without box, size 40x1 (classic sparkline)"),
            bare(1, 40),
        ),
        (Some("Showcase: Without box, size 80x10"), bare(10, 80)),
        (None, boxed(10, 80, "Showcase: With box, size 80x10")),
        (
            None,
            ranged(-2.0, 4.0, "Showcase: With box, size 80x10, y-range [-2,4]"),
        ),
        (
            None,
            ranged(-0.25, 1.25, "Showcase: With box, size 80x10, y-range [-0.25,1.25]"),
        ),
        (
            None,
            RenderConfig {
                color: false,
                ..ranged(-0.25, 1.25, "Showcase: With box, size 80x10, no colors")
            },
        ),
    ]
}

/// Every configuration of the tour rendered one after another.
pub fn showcase(renderer: &Renderer) -> Result<String, GraphError> {
    let data = sine_wave();
    let mut out = String::from(BANNER);
    for (caption, cfg) in tour() {
        if let Some(caption) = caption {
            out.push_str(caption);
            out.push('\n');
        }
        out.push_str(&renderer.render(&data, &cfg)?);
        out.push_str("\n\n");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_is_symmetric_and_peaks_in_the_middle() {
        let peak = GAUSSIAN.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(GAUSSIAN[10], peak);
        for i in 0..10 {
            assert_eq!(GAUSSIAN[i], GAUSSIAN[20 - i]);
        }
    }

    #[test]
    fn sine_covers_two_cycles() {
        let s = sine_wave();
        assert_eq!(s.len(), 101);
        assert!(s[0].abs() < 1e-12);
        assert!((s[12] - 1.0).abs() < 0.01);
        assert!(s[100].abs() < 1e-9);
    }

    fn cfg_rows(cfg: &RenderConfig) -> usize {
        if cfg.draw_box { cfg.rows + 3 } else { cfg.rows }
    }

    #[test]
    fn every_tour_stop_renders_on_a_wide_terminal() {
        let data = sine_wave();
        for (_, cfg) in tour() {
            let plain = RenderConfig { color: false, ..cfg };
            let out = Renderer::unicode().render_within(&data, &plain, 200).unwrap();
            assert!(out.chars().any(|c| ('▁'..='█').contains(&c)));
            assert!(out.lines().count() >= cfg_rows(&plain));
        }
    }
}

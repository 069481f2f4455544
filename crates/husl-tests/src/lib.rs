//! Integration tests for husl-rs crates.
//!
//! End-to-end checks of the testable properties of the conversion
//! pipeline: boundary constants, round-trip fidelity, strategy agreement
//! bounds, range invariants, and parallel determinism.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use husl_color::{ChromaMethod, HueMethod, LightMethod, Strategy, Tables, WHITE_HUE};
    use husl_compute::Converter;

    /// Every 8-bit channel value stepped by 15; 255 = 17·15, so both
    /// endpoints land on the grid.
    fn grid_values() -> Vec<u8> {
        (0..256).step_by(15).map(|x| x as u8).collect()
    }

    /// Flat RGB buffer covering the sample grid of the RGB cube.
    fn grid_buffer() -> Vec<u8> {
        let vals = grid_values();
        let mut buf = Vec::with_capacity(vals.len().pow(3) * 3);
        for &r in &vals {
            for &g in &vals {
                for &b in &vals {
                    buf.extend_from_slice(&[r, g, b]);
                }
            }
        }
        buf
    }

    fn exact() -> Converter<'static> {
        Converter::new(Tables::shared(), Strategy::default())
    }

    #[test]
    fn test_boundary_constants() {
        let husl = exact().to_husl(&[0, 0, 0, 255, 255, 255]).unwrap();
        assert_eq!(&husl[0..3], &[0.0, 0.0, 0.0]);
        assert_eq!(&husl[3..6], &[WHITE_HUE, 0.0, 100.0]);
        assert_abs_diff_eq!(husl[3], 19.9164059938, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_values() {
        let husl = exact()
            .to_husl(&[128, 64, 32, 255, 0, 0, 30, 60, 90, 10, 120, 250])
            .unwrap();
        let expected = [
            [27.165204200900, 80.671978825316, 34.723559563061],
            [12.177020725979, 100.0, 53.237114958158],
            [246.151656338881, 74.677083473035, 24.467789774457],
            [256.640288547799, 99.042554155103, 52.284540490381],
        ];
        for (i, exp) in expected.iter().enumerate() {
            for c in 0..3 {
                assert_abs_diff_eq!(husl[i * 3 + c], exp[c], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_round_trip_grid() {
        let rgb = grid_buffer();
        let converter = exact();
        let husl = converter.to_husl(&rgb).unwrap();
        let back = converter.to_rgb(&husl).unwrap();
        for (i, (&orig, &rt)) in rgb.iter().zip(back.iter()).enumerate() {
            let diff = (orig as i16 - rt as i16).abs();
            assert!(diff <= 1, "channel {i}: {orig} -> {rt}");
        }
    }

    #[test]
    fn test_range_invariants_both_strategies() {
        let rgb = grid_buffer();
        for strategy in [Strategy::default(), Strategy::approximate()] {
            let converter = Converter::new(Tables::shared(), strategy);
            let husl = converter.to_husl(&rgb).unwrap();
            for px in husl.chunks_exact(3) {
                let (h, s, l) = (px[0], px[1], px[2]);
                assert!((0.0..360.0).contains(&h), "hue {h} out of range");
                assert!((0.0..=100.0).contains(&s), "saturation {s} out of range");
                assert!((0.0..=100.0).contains(&l), "lightness {l} out of range");
            }
        }
    }

    #[test]
    fn test_chroma_strategies_agree() {
        let rgb = grid_buffer();
        let tables = Tables::shared();
        let exact = Converter::new(tables, Strategy::default()).to_husl(&rgb).unwrap();
        let lut_strategy = Strategy {
            chroma: ChromaMethod::Table,
            ..Strategy::default()
        };
        let lut = Converter::new(tables, lut_strategy).to_husl(&rgb).unwrap();
        for i in 0..rgb.len() / 3 {
            let ds = (exact[i * 3 + 1] - lut[i * 3 + 1]).abs();
            assert!(ds <= 1.0, "pixel {i}: saturation differs by {ds}");
        }
    }

    #[test]
    fn test_light_strategies_agree() {
        let rgb = grid_buffer();
        let tables = Tables::shared();
        let exact = Converter::new(tables, Strategy::default()).to_husl(&rgb).unwrap();
        let lut_strategy = Strategy {
            light: LightMethod::Table,
            ..Strategy::default()
        };
        let lut = Converter::new(tables, lut_strategy).to_husl(&rgb).unwrap();
        for i in 0..rgb.len() / 3 {
            let dl = (exact[i * 3 + 2] - lut[i * 3 + 2]).abs();
            assert!(dl <= 0.5, "pixel {i}: lightness differs by {dl}");
        }
    }

    #[test]
    fn test_hue_strategies_agree() {
        let rgb = grid_buffer();
        let tables = Tables::shared();
        let exact = Converter::new(tables, Strategy::default()).to_husl(&rgb).unwrap();
        let approx_strategy = Strategy {
            hue: HueMethod::Approximate,
            ..Strategy::default()
        };
        let approx = Converter::new(tables, approx_strategy).to_husl(&rgb).unwrap();
        for i in 0..rgb.len() / 3 {
            let mut dh = (exact[i * 3] - approx[i * 3]).abs();
            if dh > 180.0 {
                dh = 360.0 - dh;
            }
            assert!(dh <= 0.6, "pixel {i}: hue differs by {dh}");
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let rgb = grid_buffer(); // far above the parallel threshold
        let converter = exact();
        let parallel = converter.to_husl(&rgb).unwrap();
        let sequential = converter.to_husl_sequential(&rgb).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_channel_extractors() {
        let rgb = grid_buffer();
        let converter = exact();
        let husl = converter.to_husl(&rgb).unwrap();
        let hue = converter.to_hue(&rgb).unwrap();
        let lightness = converter.to_lightness(&rgb).unwrap();
        for i in 0..rgb.len() / 3 {
            assert_eq!(hue[i], husl[i * 3]);
            assert_eq!(lightness[i], husl[i * 3 + 2]);
        }
    }

    #[test]
    fn test_greys_have_zero_saturation() {
        let mut rgb = Vec::new();
        for v in 1u8..=254 {
            rgb.extend_from_slice(&[v, v, v]);
        }
        let husl = exact().to_husl(&rgb).unwrap();
        for (i, px) in husl.chunks_exact(3).enumerate() {
            assert!(px[1] < 0.01, "grey {} has saturation {}", i + 1, px[1]);
        }
    }

    #[test]
    fn test_invalid_length_rejected() {
        let err = husl_compute::to_husl(&[1, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, husl_core::Error::InvalidLength { .. }));
    }
}

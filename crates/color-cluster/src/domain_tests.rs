//! End-to-end regression tests for color-cluster.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::api::{ColorExtractor, ExtractError};
    use crate::color::Hsv;
    use crate::kmeans::{kmeans, ClusterError, KMeansOptions};
    use crate::palette::{NamingConvention, Palette, PaletteError};
    use crate::preprocess::{PixelGrid, PreprocessOptions, Preprocessor};

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Left half `left`, right half `right`, RGB.
    fn halves(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> PixelGrid {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..height {
            for x in 0..width {
                data.extend_from_slice(if x < width / 2 { &left } else { &right });
            }
        }
        PixelGrid::new(width, height, 3, data).unwrap()
    }

    // ========================================================================
    // Scenarios
    // ========================================================================

    /// If this breaks, it means: a solid-color image no longer produces a
    /// single full-weight cluster. Zero channel variance must not turn the
    /// standardized samples into NaN.
    #[test]
    fn test_scenario_solid_red() {
        let grid = PixelGrid::filled(2, 2, &[255, 0, 0]).unwrap();
        let report = ColorExtractor::new(1)
            .extract_with_rng(&grid, &Palette::css2(), &mut seeded(1))
            .unwrap();

        assert_eq!(report.centroids.len(), 1);
        let entry = &report.centroids[0];
        assert_eq!(entry.rank, 0);
        assert_eq!(entry.percentage, 1.0);
        assert_eq!(entry.name, "red");
        assert_eq!(entry.hex, "#ff0000");
        for (got, want) in entry.rgb.iter().zip([255.0, 0.0, 0.0]) {
            assert!((got - want).abs() < 1e-9);
        }
        assert_eq!(entry.hsv, [0.0, 1.0, 1.0]);
    }

    /// If this breaks, it means: two equal-area colors are no longer split
    /// evenly, so weights or assignment are wrong.
    #[test]
    fn test_scenario_red_blue_halves() {
        let grid = halves(8, 4, [255, 0, 0], [0, 0, 255]);
        for seed in 0..5 {
            let report = ColorExtractor::new(2)
                .extract_with_rng(&grid, &Palette::css2(), &mut seeded(seed))
                .unwrap();

            assert_eq!(report.centroids.len(), 2);
            let mut names: Vec<&str> =
                report.centroids.iter().map(|c| c.name.as_str()).collect();
            names.sort_unstable();
            assert_eq!(names, vec!["blue", "red"]);
            for entry in &report.centroids {
                assert!((entry.percentage - 0.5).abs() < 1e-9);
            }
        }
    }

    /// If this breaks, it means: fully transparent pixels leak into the
    /// sample, or an empty sample is clustered instead of rejected.
    #[test]
    fn test_scenario_fully_transparent() {
        let grid = PixelGrid::filled(5, 5, &[12, 34, 56, 0]).unwrap();
        let result = ColorExtractor::new(3).extract_with_rng(&grid, &Palette::css2(), &mut seeded(1));

        let err = result.unwrap_err();
        assert_eq!(err, ExtractError::Cluster(ClusterError::EmptySample));
        assert_eq!(err.condition(), "EmptySample");
    }

    /// If this breaks, it means: an unknown naming convention is accepted
    /// or reported under another condition.
    #[test]
    fn test_scenario_unknown_convention() {
        let err: ExtractError = "foo".parse::<NamingConvention>().unwrap_err().into();
        assert_eq!(
            err,
            ExtractError::Palette(PaletteError::UnknownConvention("foo".to_string()))
        );
        assert_eq!(err.condition(), "UnknownConvention");
        assert!(!err.is_retryable());
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// If this breaks, it means: some cluster came back empty or a sample
    /// ended up outside `0..k`.
    #[test]
    fn test_clusters_partition_sample() {
        let samples: Vec<[u8; 3]> = (0..600u32)
            .map(|i| [(i * 37 % 256) as u8, (i * 91 % 256) as u8, (i * 13 % 256) as u8])
            .collect();

        for k in 1..=8 {
            let result = kmeans(&samples, &KMeansOptions::new(k), &mut seeded(k as u64));
            match result {
                Ok(clustering) => {
                    assert_eq!(clustering.assignment.len(), samples.len());
                    let mut counts = vec![0usize; k];
                    for &label in &clustering.assignment {
                        counts[label] += 1;
                    }
                    assert!(counts.iter().all(|&c| c > 0), "k={k}: {counts:?}");
                }
                Err(err) => assert_eq!(err, ClusterError::DidNotConverge { iterations: 5000 }),
            }
        }
    }

    /// If this breaks, it means: reported percentages no longer describe a
    /// partition of the image.
    #[test]
    fn test_percentages_sum_to_one() {
        let mut data = Vec::new();
        for y in 0..30u32 {
            for x in 0..40u32 {
                data.extend_from_slice(&[(x * 6) as u8, (y * 8) as u8, ((x + y) * 3) as u8]);
            }
        }
        let grid = PixelGrid::new(40, 30, 3, data).unwrap();
        let report = ColorExtractor::new(4)
            .extract_with_rng(&grid, &Palette::css2(), &mut seeded(3))
            .unwrap();

        let total: f64 = report.centroids.iter().map(|c| c.percentage).sum();
        assert!((total - 1.0).abs() < 1e-9);
        for pair in report.centroids.windows(2) {
            assert!(pair[0].percentage >= pair[1].percentage);
        }
        for entry in &report.centroids {
            assert!(entry.percentage > 0.0 && entry.percentage <= 1.0);
            assert!(entry.hsv.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    /// If this breaks, it means: partially transparent pixels are dropped
    /// or blended instead of kept as opaque RGB.
    #[test]
    fn test_partial_alpha_is_kept_unblended() {
        let mut data = Vec::new();
        for alpha in [0u8, 1, 100, 254, 255, 0] {
            data.extend_from_slice(&[0, 128, 0, alpha]);
        }
        let grid = PixelGrid::new(6, 1, 4, data).unwrap();
        let sample = Preprocessor::default().process(&grid).unwrap();
        assert_eq!(sample.pixels, vec![[0, 128, 0]; 4]);

        let report = ColorExtractor::new(1)
            .extract_with_rng(&grid, &Palette::css2(), &mut seeded(5))
            .unwrap();
        assert_eq!(report.centroids[0].name, "green");
        assert!(report.meta.has_alpha);
    }

    /// If this breaks, it means: more clusters were requested than the
    /// image has colors and the run hangs or returns empty clusters.
    #[test]
    fn test_k_above_color_count_fails_deterministically() {
        let grid = halves(4, 2, [0, 0, 0], [255, 255, 255]);
        let result = ColorExtractor::new(3)
            .max_iterations(300)
            .extract_with_rng(&grid, &Palette::css2(), &mut seeded(11));

        let err = result.unwrap_err();
        assert_eq!(err.condition(), "ClusteringDidNotConverge");
        assert!(err.is_retryable());
    }

    /// If this breaks, it means: nearest-name lookups for exact palette
    /// colors are no longer reflexive for the HSV round trip the report
    /// relies on.
    #[test]
    fn test_palette_colors_name_themselves_through_hsv() {
        let palette = Palette::css2();
        for entry in palette.entries() {
            let back = Hsv::from_rgb255(entry.rgb.to_f64())
                .to_rgb()
                .map(|c| c * 255.0);
            assert_eq!(palette.nearest_name(back), entry.name);
        }
    }

    /// If this breaks, it means: a large image is clustered at full size,
    /// or the downscale changes colors of flat regions.
    #[test]
    fn test_large_image_sampled_to_max_height() {
        let grid = halves(600, 400, [255, 255, 0], [0, 0, 128]);
        let sample = Preprocessor::default().process(&grid).unwrap();
        assert_eq!((sample.width, sample.height), (150, 100));

        let report = ColorExtractor::new(2)
            .extract_with_rng(&grid, &Palette::css2(), &mut seeded(8))
            .unwrap();
        let names: Vec<&str> = report.centroids.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"yellow") && names.contains(&"navy"), "{names:?}");
    }

    /// If this breaks, it means: the color hidden under fully transparent
    /// pixels leaks into the sample when a tall RGBA image is downscaled.
    #[test]
    fn test_transparent_rows_do_not_tint_downscaled_sample() {
        let data: Vec<u8> = (0..200)
            .flat_map(|y| {
                let px: [u8; 4] = if y % 2 == 0 {
                    [255, 0, 0, 255]
                } else {
                    [0, 0, 255, 0]
                };
                px.repeat(40)
            })
            .collect();
        let grid = PixelGrid::new(40, 200, 4, data).unwrap();

        let sample = Preprocessor::default().process(&grid).unwrap();
        assert_eq!((sample.width, sample.height), (20, 100));
        assert!(sample.pixels.iter().all(|&px| px == [255, 0, 0]));

        let report = ColorExtractor::new(1)
            .extract_with_rng(&grid, &Palette::css2(), &mut seeded(13))
            .unwrap();
        assert_eq!(report.centroids[0].name, "red");
        assert_eq!(report.centroids[0].hex, "#ff0000");
    }

    /// If this breaks, it means: a very wide image is no longer bounded by
    /// the optional width cap and the sample grows with the panorama.
    #[test]
    fn test_panorama_bounded_by_max_width() {
        let grid = halves(4000, 100, [255, 255, 0], [0, 0, 128]);
        let sample = Preprocessor::new(PreprocessOptions::new().max_width(400))
            .process(&grid)
            .unwrap();
        assert_eq!((sample.width, sample.height), (400, 10));
        assert_eq!(sample.len(), 4000);
    }
}

//! Tests for seed layouts, mask seeding and canvas preparation

#[cfg(test)]
mod tests {
    use allcolors::AlgorithmError;
    use allcolors::color::Color;
    use allcolors::io::seeding::{SeedLayout, SeedMask, SeedSource, cross_positions, prepare};
    use allcolors::spatial::Position;
    use image::{GrayImage, Luma};
    use std::collections::HashSet;
    use tempfile::TempDir;

    // Tests anchors truncate the fractional coordinates
    // Verified by rounding instead of truncating
    #[test]
    fn test_layout_anchors() {
        assert_eq!(SeedLayout::One.anchors(10, 10), vec![Position::new(5, 5)]);
        assert_eq!(
            SeedLayout::Two.anchors(100, 50),
            vec![Position::new(33, 25), Position::new(67, 25)]
        );
        assert_eq!(
            SeedLayout::Three.anchors(100, 50),
            vec![
                Position::new(33, 20),
                Position::new(50, 34),
                Position::new(67, 20)
            ]
        );
        assert_eq!(SeedLayout::Four.anchors(100, 100).len(), 4);
    }

    // Tests anchors stay inside tiny canvases
    // Verified by removing the clamp
    #[test]
    fn test_anchors_clamped() {
        assert_eq!(SeedLayout::Four.anchors(1, 1), vec![Position::new(0, 0); 4]);
    }

    // Tests a plus shape covers the center row and column within the arm length
    // Verified by building a filled square instead
    #[test]
    fn test_cross_shape() {
        let cross: HashSet<Position> = cross_positions(Position::new(5, 5), 2, 20, 20).collect();

        assert_eq!(cross.len(), 9);
        assert!(cross.contains(&Position::new(3, 5)));
        assert!(cross.contains(&Position::new(5, 7)));
        assert!(!cross.contains(&Position::new(4, 4)));
    }

    // Tests arms are clipped at the canvas edges
    // Verified by allowing positions past the edge
    #[test]
    fn test_cross_clipped() {
        let cross: Vec<Position> = cross_positions(Position::new(0, 1), 5, 3, 3).collect();

        assert!(cross.iter().all(|p| p.x < 3 && p.y < 3));
        assert_eq!(cross.iter().collect::<HashSet<_>>().len(), 5);
    }

    // Tests preparation deduplicates overlapping arms into the frontier
    // Verified by leaving duplicate frontier entries
    #[test]
    fn test_prepare_layout() {
        let source = SeedSource::Layout {
            layout: SeedLayout::One,
            arm_length: 5,
            width: 64,
            height: 32,
        };

        let (canvas, frontier) = prepare(&source, Color::BLACK).expect("valid seeds");

        assert_eq!(canvas.dimensions(), (64, 32));
        assert_eq!(canvas.filled_count(), 0);
        assert_eq!(frontier.len(), 21);
        assert!(frontier.contains(Position::new(32, 16)));
    }

    // Tests mask pixels strictly brighter than the threshold become seeds
    // Verified by using a non-strict comparison
    #[test]
    fn test_mask_threshold() {
        let image = GrayImage::from_fn(4, 2, |x, y| Luma([if y == 1 { 127 + x as u8 } else { 0 }]));

        let mask = SeedMask::from_luma(&image, 127);

        assert_eq!(mask.dimensions(), (4, 2));
        assert_eq!(mask.count(), 3);
        assert_eq!(
            mask.positions().collect::<Vec<_>>(),
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 1)
            ]
        );
    }

    // Tests a mask file sizes the canvas and seeds the frontier
    // Verified by ignoring the mask dimensions
    #[test]
    fn test_prepare_mask_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("mask.png");
        GrayImage::from_fn(6, 3, |x, _| Luma([if x == 0 { 255 } else { 0 }]))
            .save(&path)
            .expect("mask written");

        let source = SeedSource::Mask {
            path,
            threshold: 127,
        };
        let (canvas, frontier) = prepare(&source, Color::BLACK).expect("valid seeds");

        assert_eq!(canvas.dimensions(), (6, 3));
        assert_eq!(frontier.len(), 3);
    }

    // Tests an all-dark mask is rejected before the run starts
    // Verified by starting with an empty frontier
    #[test]
    fn test_empty_mask_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("dark.png");
        GrayImage::new(4, 4).save(&path).expect("mask written");

        let result = prepare(
            &SeedSource::Mask {
                path,
                threshold: 127,
            },
            Color::BLACK,
        );

        assert!(matches!(result, Err(AlgorithmError::InvalidSourceData { .. })));
    }

    // Tests a missing mask file reports a load error with its path
    // Verified by mapping load failures to a generic error
    #[test]
    fn test_missing_mask_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("absent.png");

        let result = prepare(
            &SeedSource::Mask {
                path: path.clone(),
                threshold: 127,
            },
            Color::BLACK,
        );

        match result {
            Err(AlgorithmError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an image load error, got {other:?}"),
        }
    }
}

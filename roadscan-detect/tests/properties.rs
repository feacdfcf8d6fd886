use proptest::prelude::*;
use roadscan_detect::{detect, PixelBuffer, PotholeDetector};

const PALETTE: [[u8; 4]; 6] = [
    [80, 80, 80, 255],    // asphalt
    [10, 10, 10, 255],    // hole
    [180, 180, 180, 255], // concrete
    [150, 50, 50, 200],   // brick
    [255, 255, 255, 255], // sky
    [40, 200, 40, 255],   // grass
];

fn photo() -> impl Strategy<Value = (u32, u32, Vec<u8>)> {
    (1u32..40, 1u32..40).prop_flat_map(|(width, height)| {
        let pixels = prop::collection::vec(
            prop::sample::select(PALETTE.to_vec()),
            (width * height) as usize,
        );
        (Just(width), Just(height), pixels.prop_map(|p| p.concat()))
    })
}

proptest! {
    #[test]
    fn confidence_stays_in_bounds((width, height, data) in photo()) {
        let result = detect(&PixelBuffer::new(width, height, &data)).unwrap();
        prop_assert!(result.confidence >= 0.05 && result.confidence <= 0.95);
        prop_assert_eq!(result.is_pothole, result.confidence > 0.4);
    }

    #[test]
    fn detection_is_deterministic((width, height, data) in photo()) {
        let buffer = PixelBuffer::new(width, height, &data);
        let first = detect(&buffer).unwrap();
        let second = detect(&buffer).unwrap();
        prop_assert_eq!(first.confidence.to_bits(), second.confidence.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn low_road_ratio_gates_detection((width, height, data) in photo()) {
        let buffer = PixelBuffer::new(width, height, &data);
        let features = PotholeDetector::new().analyze_features(&buffer).unwrap();
        let result = detect(&buffer).unwrap();

        if features.road_surface_ratio < 0.3 {
            prop_assert!(!result.is_road_image);
            prop_assert!(!result.is_pothole);
            prop_assert_eq!(result.confidence, 0.1);
        } else {
            prop_assert!(result.is_road_image);
            prop_assert_eq!(result.confidence, features.confidence());
        }
    }

    #[test]
    fn raw_random_bytes_never_fail((width, height) in (1u32..24, 1u32..24), seed in any::<u64>()) {
        let data = (0..width * height * 4)
            .map(|i| (seed.rotate_left(i % 64) as u8) ^ (i as u8))
            .collect::<Vec<u8>>();
        let result = detect(&PixelBuffer::new(width, height, &data));
        prop_assert!(result.is_ok());
    }
}

use knet::{DatasetGenerator, Error};
use rand::{rngs::StdRng, SeedableRng};

mod assert;

use assert::assert_block_encoded;

#[test]
fn generated_samples_are_block_encoded() {
    let mut rng = StdRng::seed_from_u64(1450);
    for (property_count, group_count, sample_count) in
        [(32, 8, 25), (32, 16, 25), (12, 3, 100), (5, 1, 7), (8, 4, 0)]
    {
        let dataset = DatasetGenerator::new(group_count)
            .generate_dataset(property_count, sample_count, &mut rng)
            .unwrap();
        assert_eq!(dataset.sample_count(), sample_count);
        assert_eq!(dataset.property_count(), property_count);
        assert_eq!(dataset.group_count(), group_count);
        for (sample, group) in dataset.iter() {
            assert_eq!(sample.len(), property_count);
            assert!(group < group_count);
            assert_block_encoded(sample, group, group_count);
        }
    }
}

#[test]
fn shuffle_moves_samples_with_their_labels() {
    let mut rng = StdRng::seed_from_u64(11);
    let dataset = DatasetGenerator::new(8)
        .generate_dataset(32, 256, &mut rng)
        .unwrap();
    let round_robin: Vec<_> = (0..256).map(|i| i % 8).collect();
    assert_ne!(dataset.groups(), round_robin.as_slice());
    for (sample, group) in dataset.iter() {
        assert_block_encoded(sample, group, 8);
    }
}

#[test]
fn optional_entries_take_both_values() {
    let mut rng = StdRng::seed_from_u64(5);
    let dataset = DatasetGenerator::new(2)
        .generate_dataset(16, 200, &mut rng)
        .unwrap();
    let ones: usize = dataset
        .samples()
        .iter()
        .map(|s| s.iter().filter(|x| **x == 1.0).count() - 1)
        .sum();
    let optional = 200 * 7;
    assert!(ones > optional / 3 && ones < optional * 2 / 3, "{} ones", ones);
}

#[test]
fn same_seed_reproduces_the_dataset() {
    let generator = DatasetGenerator::new(4);
    let a = generator
        .generate_dataset(16, 40, &mut StdRng::seed_from_u64(99))
        .unwrap();
    let b = generator
        .generate_dataset(16, 40, &mut StdRng::seed_from_u64(99))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn indivisible_property_count_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        DatasetGenerator::new(5).generate_dataset(32, 10, &mut rng),
        Err(Error::ShapeRelation {
            property_count: 32,
            group_count: 5
        })
    );
}

#![allow(dead_code)]

use knet::{Dataset, Network};

pub fn assert_block_encoded(sample: &[f64], group: usize, group_count: usize) {
    assert_eq!(sample.len() % group_count, 0);
    let block_size = sample.len() / group_count;
    let block = group * block_size..(group + 1) * block_size;
    assert_eq!(sample[block.start], 1.0, "signature feature of group {}", group);
    for (i, x) in sample.iter().enumerate() {
        if block.contains(&i) {
            assert!(*x == 0.0 || *x == 1.0, "entry {} is {}", i, x);
        } else {
            assert_eq!(*x, 0.0, "entry {} lies outside block of group {}", i, group);
        }
    }
}

pub fn assert_group_order_in_range(network: &Network) {
    assert_eq!(network.group_order().len(), network.group_count());
    for &g in network.group_order() {
        assert!(g < network.group_count());
    }
}

pub fn prototypes(network: &Network) -> Vec<Vec<f64>> {
    (0..network.group_count())
        .map(|j| network.prototype(j).unwrap().to_vec())
        .collect()
}

/// Index of the heaviest block of `weights`, lowest index on ties.
pub fn heaviest_block(weights: &[f64], group_count: usize) -> usize {
    let block_size = weights.len() / group_count;
    let mut best = 0;
    let mut best_sum = f64::NEG_INFINITY;
    for (b, block) in weights.chunks(block_size).take(group_count).enumerate() {
        let sum: f64 = block.iter().sum();
        if sum > best_sum {
            best = b;
            best_sum = sum;
        }
    }
    best
}

pub fn mismatches(network: &Network, dataset: &Dataset) -> usize {
    network
        .predict_on_dataset(dataset)
        .compare_datasets(dataset)
        .unwrap()
        .len()
}

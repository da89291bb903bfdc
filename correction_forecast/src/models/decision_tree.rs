//! CART regression tree over `[year, month]` features

use super::{features, ForecastModel, TrainedForecastModel};
use crate::error::{ForecastError, Result};
use correction_math::{Period, RateObservation};
use serde::{Deserialize, Serialize};

/// Regression tree configuration
#[derive(Debug, Clone)]
pub struct DecisionTreeRegressor {
    /// Name of the model
    name: String,
    /// Maximum depth, unlimited when `None`
    max_depth: Option<usize>,
    /// Minimum number of samples a node needs to be split
    min_samples_split: usize,
}

/// Node of a fitted tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    Leaf {
        value: f64,
        samples: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// Trained regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedDecisionTree {
    name: String,
    root: TreeNode,
}

type Sample = ([f64; 2], f64);

impl DecisionTreeRegressor {
    /// Create a new regression tree
    pub fn new(max_depth: Option<usize>, min_samples_split: usize) -> Result<Self> {
        if max_depth == Some(0) {
            return Err(ForecastError::InvalidParameter(
                "Max depth must be positive".to_string(),
            ));
        }
        if min_samples_split < 2 {
            return Err(ForecastError::InvalidParameter(
                "Minimum samples to split must be at least 2".to_string(),
            ));
        }

        let depth = max_depth.map_or_else(|| "none".to_string(), |d| d.to_string());
        Ok(Self {
            name: format!(
                "Decision Tree (max_depth={}, min_samples_split={})",
                depth, min_samples_split
            ),
            max_depth,
            min_samples_split,
        })
    }

    fn build(&self, samples: &mut [Sample], depth: usize) -> TreeNode {
        let n = samples.len();
        let mean = samples.iter().map(|(_, y)| y).sum::<f64>() / n as f64;
        let leaf = TreeNode::Leaf {
            value: mean,
            samples: n,
        };

        if n < self.min_samples_split || self.max_depth.is_some_and(|max| depth >= max) {
            return leaf;
        }

        let impurity: f64 = samples.iter().map(|(_, y)| (y - mean).powi(2)).sum();
        if impurity <= f64::EPSILON {
            return leaf;
        }

        let Some((feature, threshold)) = best_split(samples) else {
            return leaf;
        };

        let split_at = partition(samples, feature, threshold);
        let (left, right) = samples.split_at_mut(split_at);

        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(self.build(left, depth + 1)),
            right: Box::new(self.build(right, depth + 1)),
        }
    }
}

impl Default for DecisionTreeRegressor {
    fn default() -> Self {
        Self {
            name: "Decision Tree (max_depth=none, min_samples_split=2)".to_string(),
            max_depth: None,
            min_samples_split: 2,
        }
    }
}

/// Find the split with the lowest summed squared error of both children.
///
/// Thresholds sit halfway between consecutive distinct feature values.
fn best_split(samples: &mut [Sample]) -> Option<(usize, f64)> {
    let n = samples.len();
    let mut best: Option<(f64, usize, f64)> = None;

    for feature in 0..2 {
        samples.sort_by(|a, b| a.0[feature].total_cmp(&b.0[feature]));

        let total_sum: f64 = samples.iter().map(|(_, y)| y).sum();
        let total_sq: f64 = samples.iter().map(|(_, y)| y * y).sum();
        let mut left_sum = 0.0;
        let mut left_sq = 0.0;

        for i in 1..n {
            let y = samples[i - 1].1;
            left_sum += y;
            left_sq += y * y;

            let lo = samples[i - 1].0[feature];
            let hi = samples[i].0[feature];
            if lo >= hi {
                continue;
            }

            let left_n = i as f64;
            let right_n = (n - i) as f64;
            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let sse = (left_sq - left_sum * left_sum / left_n)
                + (right_sq - right_sum * right_sum / right_n);

            if best.map_or(true, |(best_sse, _, _)| sse < best_sse) {
                best = Some((sse, feature, (lo + hi) / 2.0));
            }
        }
    }

    best.map(|(_, feature, threshold)| (feature, threshold))
}

/// Move samples with `x[feature] <= threshold` to the front; returns their count
fn partition(samples: &mut [Sample], feature: usize, threshold: f64) -> usize {
    samples.sort_by(|a, b| a.0[feature].total_cmp(&b.0[feature]));
    samples.partition_point(|(x, _)| x[feature] <= threshold)
}

impl ForecastModel for DecisionTreeRegressor {
    type Trained = TrainedDecisionTree;

    fn train(&self, samples: &[RateObservation]) -> Result<Self::Trained> {
        if samples.is_empty() {
            return Err(ForecastError::ValidationError(
                "Cannot train a decision tree on an empty series".to_string(),
            ));
        }

        let mut data: Vec<Sample> = samples
            .iter()
            .map(|obs| (features(obs.period), obs.rate))
            .collect();

        Ok(TrainedDecisionTree {
            name: self.name.clone(),
            root: self.build(&mut data, 0),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedDecisionTree {
    /// Number of levels below the root
    pub fn depth(&self) -> usize {
        fn walk(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 0,
                TreeNode::Split { left, right, .. } => 1 + walk(left).max(walk(right)),
            }
        }
        walk(&self.root)
    }

    /// Number of leaves
    pub fn leaves(&self) -> usize {
        fn walk(node: &TreeNode) -> usize {
            match node {
                TreeNode::Leaf { .. } => 1,
                TreeNode::Split { left, right, .. } => walk(left) + walk(right),
            }
        }
        walk(&self.root)
    }
}

impl TrainedForecastModel for TrainedDecisionTree {
    fn predict_rate(&self, period: Period) -> Result<f64> {
        let x = features(period);
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf { value, .. } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = x.get(*feature).ok_or_else(|| {
                        ForecastError::ModelError(format!("Unknown feature index {}", feature))
                    })?;
                    node = if *value <= *threshold { left } else { right };
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

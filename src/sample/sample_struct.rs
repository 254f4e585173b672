use rayon::prelude::*;

use crate::{
    common::checker,
    SpatialClusterer,
    Result,
};

use std::ops::Index;


/// Struct `Sample` holds a batch of examples in row-major format
/// together with their binary labels.
///
/// A `Sample` is validated on construction:
/// it has at least one row, every row has the same positive length,
/// and every label is `0` or `1`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) data: Vec<Vec<f64>>,
    pub(super) target: Vec<i64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a new `Sample` from the rows `data`
    /// and the labels `target`.
    /// This method takes the ownership for the given pair.
    pub fn new(data: Vec<Vec<f64>>, target: Vec<i64>) -> Result<Self> {
        checker::non_empty("data", data.len())?;
        let n_sample = data.len();
        checker::length("target", n_sample, target.len())?;

        let n_feature = data[0].len();
        checker::non_empty("row", n_feature)?;
        for row in &data[1..] {
            checker::length("row", n_feature, row.len())?;
        }
        checker::labels(&target)?;

        Ok(Self { data, target, n_sample, n_feature, })
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the rows of `self`.
    #[inline]
    pub fn data(&self) -> &[Vec<f64>] {
        &self.data[..]
    }


    /// Returns the labels of `self`.
    #[inline]
    pub fn target(&self) -> &[i64] {
        &self.target[..]
    }


    /// Returns the `idx`-th instance `(x, y)`.
    #[inline]
    pub fn at(&self, idx: usize) -> Result<(&[f64], i64)> {
        checker::index(idx, self.n_sample)?;
        Ok((&self.data[idx][..], self.target[idx]))
    }


    /// Returns an iterator over the pairs `(x, y)`.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], i64)> + '_ {
        self.data.iter()
            .map(|x| &x[..])
            .zip(self.target.iter().copied())
    }


    /// Reduces every row of `self` with `clusterer`.
    /// The labels are copied as they are.
    pub fn reduce(&self, clusterer: &SpatialClusterer) -> Result<Self> {
        checker::length("row", clusterer.n_points(), self.n_feature)?;

        let data = self.data.par_iter()
            .map(|row| clusterer.reduce_dimensions(row))
            .collect::<Result<Vec<_>>>()?;

        let sample = Self {
            data,
            target: self.target.clone(),
            n_sample: self.n_sample,
            n_feature: clusterer.n_clusters(),
        };
        Ok(sample)
    }


    /// Split `self` into a training/test pair.
    /// The test part consists of the rows `ix[start..end]`
    /// and the training part of all other rows.
    /// The caller guarantees that both parts are non-empty.
    pub(crate) fn split<T>(&self, ix: T, start: usize, end: usize)
        -> (Sample, Sample)
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        let test_size = end - start;
        let train_size = self.n_sample - test_size;

        let mut train = Self {
            data: Vec::with_capacity(train_size),
            target: Vec::with_capacity(train_size),
            n_sample: train_size,
            n_feature: self.n_feature,
        };
        let mut test = Self {
            data: Vec::with_capacity(test_size),
            target: Vec::with_capacity(test_size),
            n_sample: test_size,
            n_feature: self.n_feature,
        };

        for (pos, &i) in ix.iter().enumerate() {
            let part = if (start..end).contains(&pos) {
                &mut test
            } else {
                &mut train
            };
            part.data.push(self.data[i].clone());
            part.target.push(self.target[i]);
        }

        (train, test)
    }
}


impl Index<usize> for Sample {
    type Output = [f64];


    fn index(&self, idx: usize) -> &Self::Output {
        &self.data[idx][..]
    }
}

use std::error::Error;

use crate::core::data::cell::Cell;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: Cell) -> Result<Self::Success, Self::Failure>;
}

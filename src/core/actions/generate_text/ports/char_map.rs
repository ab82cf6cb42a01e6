use std::error::Error;

pub trait CharMap {
    type T;
    type Failure: Error;

    fn map(&self, value: Self::T) -> Result<char, Self::Failure>;
}

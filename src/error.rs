//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// The one synchronous error kind visible at the core boundary.
// Indeterminate geometry and budget exhaustion are modeled as data
// (see poly::RootResult and subdivision::IntersectionResult), never
// as Err variants here.
//--------------------------------------------------------------------

use derive_more::Display;

use crate::scalar::Coord;

#[derive(Debug, Display, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[display(fmt = "invalid point coordinates: ({}, {})", _0, _1)]
    InvalidArgument(Coord, Coord),
}

impl std::error::Error for GeometryError {}

pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_coordinates() {
        let e = GeometryError::InvalidArgument(Coord::NAN, 0.0);
        assert!(format!("{}", e).contains("NaN"));
    }
}

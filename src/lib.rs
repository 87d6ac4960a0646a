/*!
decomp3d
========

**decomp3d** turns concave 3D collision meshes into sets of convex shapes.

A raw triangle soup is welded into an indexed mesh, its winding is made
outward-facing, and the result is handed to a pluggable convex decomposition
backend. The convex parts returned by the backend are converted back into
point clouds from which [`parry3d`] convex shapes are built.

```
use decomp3d::config::DecompositionConfig;
use decomp3d::decomposition::{ConvexDecomposition, ConvexHullDecomposer};
use decomp3d::math::Point;

let a = Point::new(0.0, 0.0, 0.0);
let b = Point::new(1.0, 0.0, 0.0);
let c = Point::new(0.0, 1.0, 0.0);
let d = Point::new(0.0, 0.0, 1.0);
let soup = [a, c, b, a, b, d, a, d, c, b, c, d];

let decomposition = ConvexDecomposition::new(ConvexHullDecomposer);
let shapes = decomposition
    .convex_decomposition(&soup, &DecompositionConfig::default())
    .unwrap();
assert_eq!(shapes.len(), 1);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;
pub extern crate parry3d;

pub mod config;
pub mod decomposition;
pub mod logging;
pub mod mesh;
pub mod reconstruct;

mod error;

pub use self::error::{DecomposerError, DecompositionError};

/// Aliases for the mathematical types shared with `parry3d`.
pub mod math {
    pub use parry3d::math::{Isometry, Point, Real, Vector, DIM};
}

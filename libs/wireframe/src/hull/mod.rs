//! # Convex Hull
//!
//! QuickHull over the profile vertices gathered at a wireframe corner.
//!
//! Unlike a general hull that emits a fresh mesh, the result here is a
//! triangle list indexing the caller's point slice: junction caps must
//! reference the prism vertices already in the output mesh, never new
//! copies of them.

mod quickhull;


pub use quickhull::convex_hull_indices;

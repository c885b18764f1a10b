//! # LazyTools Wireframe
//!
//! Generates wireframe-like structures by replacing every edge of a mesh
//! with a prism extruded from a 2D cross-section profile (square, round
//! or triangular), then closing the corners where several prisms meet
//! with convex-hull caps and welding coincident vertices.
//!
//! Unlike a uniform-thickness wireframe modifier, the cross-section shape
//! and resolution are configurable, and junctions are filled so the
//! result reads as one solid lattice.
//!
//! ## Pipeline
//!
//! ```text
//! edges → frame solve → prism build ─┐
//!              │                     ├→ weld → output mesh
//!              └→ corner map → hull caps ┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use lazytools_wireframe::{generate_wireframe, WireframeParams};
//!
//! let edges = [(DVec3::ZERO, DVec3::Z)];
//! let mesh = generate_wireframe(&edges, &WireframeParams::default()).unwrap();
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.face_count(), 4);
//! ```

pub mod build;
pub mod corner;
pub mod error;
pub mod frame;
pub mod hull;
pub mod junction;
pub mod mesh;
pub mod prism;
pub mod profile;
pub mod weld;

pub use build::{extrude_profiles_along_edges, generate_wireframe, WireframeParams};
pub use error::WireframeError;
pub use mesh::Mesh;
pub use profile::{Profile, ProfileShape};
pub use weld::weld;

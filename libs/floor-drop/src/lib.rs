//! # LazyTools Floor Drop
//!
//! Drops objects onto the surface of the geometry below them. The drop
//! distance comes from a downward raycast starting just under the
//! lowest point of the object's hierarchy bounding box; the object, its
//! children and the rest of the selection are hidden during the cast so
//! they never catch their own ray. When nothing lies below, an optional
//! user-defined floor level catches the object instead.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use lazytools_floor_drop::{drop_to_geometry_below, FloorDropParams};
//! use lazytools_scene::{MemScene, Scene};
//!
//! let mut scene = MemScene::new();
//! let floor = scene.add_object(
//!     "floor",
//!     vec![
//!         DVec3::new(-5.0, -5.0, 0.0),
//!         DVec3::new(5.0, -5.0, 0.0),
//!         DVec3::new(5.0, 5.0, 0.0),
//!         DVec3::new(-5.0, 5.0, 0.0),
//!     ],
//!     vec![],
//!     vec![vec![0, 1, 2, 3]],
//! );
//! let lamp = scene.add_object("lamp", vec![DVec3::ZERO], vec![], vec![]);
//! scene.set_location(lamp, DVec3::new(0.0, 0.0, 3.0)).unwrap();
//!
//! drop_to_geometry_below(&mut scene, lamp, &FloorDropParams::default()).unwrap();
//! assert!(scene.location(lamp).unwrap().z.abs() < 1e-9);
//! # let _ = floor;
//! ```

pub mod drop;
pub mod error;

pub use drop::{drop_selected_objects, drop_to_geometry_below, DropOutcome, FloorDropParams};
pub use error::FloorDropError;

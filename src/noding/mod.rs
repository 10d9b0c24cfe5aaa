//! Noding: computing all intersection points in a set of segment strings
//! and splitting the strings there, so the resulting substrings meet only
//! at endpoints.

pub mod chain;
pub mod index_noder;
pub mod octant;
pub mod oriented;
pub mod segment_intersector;
pub mod segment_node;
pub mod segment_string;
pub mod validator;

pub use chain::MonotoneChain;
pub use index_noder::{McIndexNoder, McIndexSegmentSetMutualIntersector};
pub use oriented::OrientedCoordinateArray;
pub use segment_intersector::{IntersectionAdder, InteriorIntersectionFinder, SegmentIntersector};
pub use segment_node::{SegmentNode, SegmentNodeList};
pub use segment_string::NodedSegmentString;
pub use validator::check_noded;

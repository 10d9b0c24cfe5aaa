//! Verification that a set of segment strings is fully noded.

use std::rc::Rc;

use super::index_noder::McIndexNoder;
use super::segment_intersector::InteriorIntersectionFinder;
use super::segment_string::NodedSegmentString;
use crate::error::TopologyError;

/// Checks that no segment intersection lies in a segment interior.
///
/// Runs the indexed noder with an early-exit finder, so the cost is close
/// to a single noding pass and much less when a violation exists.
pub fn check_noded<D: Clone>(strings: &[Rc<NodedSegmentString<D>>]) -> Result<(), TopologyError> {
    let mut finder = InteriorIntersectionFinder::new();
    McIndexNoder::new().compute_nodes(strings, &mut finder);
    match finder.intersection() {
        Some(pt) => Err(TopologyError::NonNodedIntersection { x: pt.x, y: pt.y }),
        None => Ok(()),
    }
}

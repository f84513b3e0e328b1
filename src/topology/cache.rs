//! Cache invalidation for values that memoize derived topology.

/// Anything that caches derived topology (connectedness, component counts, …)
/// implements this.
pub trait InvalidateCache {
    /// Drop every memoized result so future queries recompute it.
    fn invalidate_cache(&mut self);
}

impl<T: InvalidateCache + ?Sized> InvalidateCache for Box<T> {
    #[inline]
    fn invalidate_cache(&mut self) {
        (**self).invalidate_cache();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{BTreeDigitalSet, DigitalSet, Point};
    use crate::topology::connectedness::Connectedness;
    use crate::topology::digital_topology::z2i;
    use crate::topology::object::DigitalObject;

    #[test]
    fn boxed_objects_forward_invalidation() {
        let set = BTreeDigitalSet::from_points(z2i::Domain::cube(3), [Point::new([0, 0])]);
        let mut obj = Box::new(DigitalObject::new(z2i::dt4_8(), set));
        assert_eq!(obj.compute_connectedness(), Connectedness::Connected);
        obj.invalidate_cache();
        assert_eq!(obj.connectedness(), Connectedness::Unknown);
    }
}

use proptest::prelude::*;

use super::fixtures::*;
use crate::kernel::{DigitalSet, Domain};
use crate::topology::adjacency::Adjacency;
use crate::topology::connectedness::Connectedness;

const SIDE: i64 = 6;

fn coords() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0..SIDE, 0..SIDE), 0..24)
}

proptest! {
    #[test]
    fn border_is_a_subset(pts in coords()) {
        let o = obj4_8(square(SIDE), &pts);
        let border = o.border();
        prop_assert!(border.point_set().iter().all(|q| o.point_set().contains(&q)));
        prop_assert!(border.size() <= o.size());
    }

    #[test]
    fn neighborhood_matches_adjacency(pts in coords(), x in 0..SIDE, y in 0..SIDE) {
        let o = obj8_4(square(SIDE), &pts);
        let c = p(x, y);
        let expected: Vec<_> = o
            .point_set()
            .iter()
            .filter(|&q| o.adjacency().is_adjacent_to(c, q))
            .collect();
        prop_assert_eq!(points(o.neighborhood(c).point_set()), expected.clone());
        prop_assert_eq!(o.neighborhood_size(c), expected.len());

        let proper = o.proper_neighborhood_size(c);
        let member = usize::from(o.point_set().contains(&c));
        prop_assert_eq!(proper + member, expected.len());
    }

    #[test]
    fn components_partition_the_object(pts in coords()) {
        let o = obj4_8(square(SIDE), &pts);
        let comps = o.components();
        prop_assert_eq!(comps.len(), o.count_components());
        prop_assert_eq!(comps.iter().map(|c| c.size()).sum::<usize>(), o.size());

        let mut all: Vec<_> = comps.iter().flat_map(|c| points(c.point_set())).collect();
        all.sort();
        prop_assert_eq!(all, points(o.point_set()));

        for (i, a) in comps.iter().enumerate() {
            prop_assert_eq!(a.compute_connectedness(), Connectedness::Connected);
            for b in &comps[i + 1..] {
                for u in a.point_set().iter() {
                    prop_assert!(b
                        .point_set()
                        .iter()
                        .all(|w| !o.adjacency().is_adjacent_to(u, w)));
                }
            }
        }
    }

    #[test]
    fn connectedness_agrees_with_components(pts in coords()) {
        let o = obj8_4(square(SIDE), &pts);
        let expected = if o.count_components() <= 1 {
            Connectedness::Connected
        } else {
            Connectedness::Disconnected
        };
        prop_assert_eq!(o.compute_connectedness(), expected);
        prop_assert_eq!(o.connectedness(), expected);
    }

    #[test]
    fn simple_points_keep_component_count(pts in coords(), x in 1..SIDE - 1, y in 1..SIDE - 1) {
        let o = obj8_4(square(SIDE), &pts);
        let v = p(x, y);
        prop_assume!(o.point_set().contains(&v));
        prop_assume!(o.is_simple(v));

        let mut removed = o.clone();
        removed.point_set_mut().remove(&v);
        prop_assert_eq!(removed.count_components(), o.count_components());
    }

    #[test]
    fn border_touches_complement(pts in coords()) {
        let o = obj4_8(square(SIDE), &pts);
        let domain = *o.domain();
        for q in o.border().point_set().iter() {
            prop_assert!(domain
                .points()
                .any(|r| !o.point_set().contains(&r)
                    && o.background_adjacency().is_properly_adjacent_to(q, r)));
        }
    }
}

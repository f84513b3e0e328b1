use dgtopo::prelude::*;
use dgtopo::topology::ComplementObject;

type Set2 = BTreeDigitalSet<z2i::Domain>;

fn p(x: i64, y: i64) -> z2i::Point {
    Point::new([x, y])
}

/// Two 4-connected blobs and a diagonal bridge between them.
fn blobs() -> Set2 {
    let mut pts = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            pts.push(p(x, y));
            pts.push(p(x + 4, y + 4));
        }
    }
    pts.push(p(3, 3));
    Set2::from_points(z2i::Domain::cube(10), pts)
}

#[test]
fn topology_decides_how_many_components() {
    let four = DigitalObject::new(z2i::dt4_8(), blobs());
    let eight = DigitalObject::new(z2i::dt8_4(), blobs());

    assert_eq!(four.count_components(), 3);
    assert_eq!(four.compute_connectedness(), Connectedness::Disconnected);
    assert_eq!(eight.count_components(), 1);
    assert_eq!(eight.compute_connectedness(), Connectedness::Connected);
}

#[test]
fn components_come_in_order_of_their_smallest_point() {
    let four = DigitalObject::new(z2i::dt4_8(), blobs());
    let sizes_and_mins: Vec<_> = four
        .components()
        .iter()
        .map(|c| (c.size(), c.point_set().iter().next()))
        .collect();
    assert_eq!(
        sizes_and_mins,
        vec![(9, Some(p(0, 0))), (1, Some(p(3, 3))), (9, Some(p(4, 4)))]
    );
}

#[test]
fn components_of_complement_count_holes() {
    let ring = [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)];
    let domain = z2i::Domain::cube(5);
    let object = DigitalObject::new(
        z2i::dt8_4(),
        Set2::from_points(domain, ring.iter().map(|&(x, y)| p(x, y))),
    );
    let complement: ComplementObject<z2i::Adj8, z2i::Adj4, Set2> = DigitalObject::new(
        object.topology().reverse_topology(),
        Set2::from_points(
            domain,
            domain.points().filter(|q| !object.point_set().contains(q)),
        ),
    );
    assert_eq!(complement.count_components(), 2);
    assert_eq!(complement.border().size(), complement.size());
}

#[test]
fn shared_objects_are_independent_after_mutation() {
    let a = DigitalObject::new(z2i::dt4_8(), blobs());
    let mut b = a.clone();
    assert_eq!(a, b);

    b.point_set_mut().remove(&p(3, 3));
    assert_ne!(a, b);
    assert_eq!(a.size(), 19);
    assert_eq!(b.size(), 18);
    assert_eq!(b.count_components(), 2);
    assert!(a.is_valid() && b.is_valid());
}

#[test]
fn vec_backed_objects_behave_like_btree_ones() {
    let pts: Vec<_> = blobs().iter().collect();
    let vec_obj = DigitalObject::new(
        z2i::dt4_8(),
        VecDigitalSet::from_points(z2i::Domain::cube(10), pts),
    );
    let btree_obj = DigitalObject::new(z2i::dt4_8(), blobs());
    assert_eq!(vec_obj.count_components(), btree_obj.count_components());
    assert_eq!(vec_obj.border().size(), btree_obj.border().size());
    assert_eq!(vec_obj.adjacency_edges(), btree_obj.adjacency_edges());
}

#[test]
fn volume_components_in_3d() {
    let q = |x: i64, y: i64, z: i64| -> z3i::Point { Point::new([x, y, z]) };
    let set = BTreeDigitalSet::from_points(
        z3i::Domain::cube(4),
        [q(0, 0, 0), q(1, 1, 0), q(2, 2, 2), q(3, 3, 3)],
    );
    let counts = [
        DigitalObject::new(z3i::dt6_26(), set.clone()).count_components(),
        DigitalObject::new(z3i::dt18_6(), set.clone()).count_components(),
        DigitalObject::new(z3i::dt26_6(), set).count_components(),
    ];
    assert_eq!(counts, [4, 3, 2]);
}

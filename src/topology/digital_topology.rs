//! Digital topologies: a foreground/background pair of adjacencies.
//!
//! A [`DigitalTopology`] couples the adjacency κ used between points of an
//! object (foreground) with the adjacency λ used between points of its
//! complement (background). Reversing the topology swaps the two roles,
//! which is how complement objects are typed.
//!
//! Border and simple-point computations are only meaningful when (κ, λ) is
//! a Jordan pair, e.g. (4, 8) or (8, 4) in 2D, (6, 18), (18, 6), (6, 26) or
//! (26, 6) in 3D. This is a caller obligation; the constructors below only
//! record what the caller claims in [`DigitalTopologyProperties`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the caller asserts about a (κ, λ) pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitalTopologyProperties {
    #[default]
    UnknownDt,
    NotJordanDt,
    JordanDt,
}

/// A pair (κ, λ) of foreground and background adjacencies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitalTopology<F, B> {
    kappa: F,
    lambda: B,
    properties: DigitalTopologyProperties,
}

impl<F, B> DigitalTopology<F, B> {
    pub fn new(kappa: F, lambda: B, properties: DigitalTopologyProperties) -> Self {
        Self {
            kappa,
            lambda,
            properties,
        }
    }

    /// Foreground adjacency κ.
    #[inline]
    pub fn kappa(&self) -> &F {
        &self.kappa
    }

    /// Background adjacency λ.
    #[inline]
    pub fn lambda(&self) -> &B {
        &self.lambda
    }

    /// Alias of [`Self::kappa`].
    #[inline]
    pub fn foreground(&self) -> &F {
        &self.kappa
    }

    /// Alias of [`Self::lambda`].
    #[inline]
    pub fn background(&self) -> &B {
        &self.lambda
    }

    #[inline]
    pub fn properties(&self) -> DigitalTopologyProperties {
        self.properties
    }

    /// The topology (λ, κ) used by complements of objects with this topology.
    pub fn reverse_topology(&self) -> DigitalTopology<B, F>
    where
        F: Clone,
        B: Clone,
    {
        DigitalTopology::new(self.lambda.clone(), self.kappa.clone(), self.properties)
    }
}

impl<F: fmt::Display, B: fmt::Display> fmt::Display for DigitalTopology<F, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[DigitalTopology fg={} bg={} props={:?}]",
            self.kappa, self.lambda, self.properties
        )
    }
}

/// Standard adjacencies and topologies of the digital plane.
#[allow(non_camel_case_types)]
pub mod z2i {
    use super::{DigitalTopology, DigitalTopologyProperties};
    use crate::kernel::domain::HyperRectDomain;
    use crate::topology::adjacency::MetricAdjacency;

    pub type Point = crate::kernel::point::Point<2>;
    pub type Domain = HyperRectDomain<2>;
    pub type Adj4 = MetricAdjacency<2, 1>;
    pub type Adj8 = MetricAdjacency<2, 2>;
    pub type DT4_8 = DigitalTopology<Adj4, Adj8>;
    pub type DT8_4 = DigitalTopology<Adj8, Adj4>;

    pub fn dt4_8() -> DT4_8 {
        DigitalTopology::new(Adj4::new(), Adj8::new(), DigitalTopologyProperties::JordanDt)
    }

    pub fn dt8_4() -> DT8_4 {
        DigitalTopology::new(Adj8::new(), Adj4::new(), DigitalTopologyProperties::JordanDt)
    }
}

/// Standard adjacencies and topologies of the digital 3-space.
#[allow(non_camel_case_types)]
pub mod z3i {
    use super::{DigitalTopology, DigitalTopologyProperties};
    use crate::kernel::domain::HyperRectDomain;
    use crate::topology::adjacency::MetricAdjacency;

    pub type Point = crate::kernel::point::Point<3>;
    pub type Domain = HyperRectDomain<3>;
    pub type Adj6 = MetricAdjacency<3, 1>;
    pub type Adj18 = MetricAdjacency<3, 2>;
    pub type Adj26 = MetricAdjacency<3, 3>;
    pub type DT6_18 = DigitalTopology<Adj6, Adj18>;
    pub type DT18_6 = DigitalTopology<Adj18, Adj6>;
    pub type DT6_26 = DigitalTopology<Adj6, Adj26>;
    pub type DT26_6 = DigitalTopology<Adj26, Adj6>;

    pub fn dt6_18() -> DT6_18 {
        DigitalTopology::new(Adj6::new(), Adj18::new(), DigitalTopologyProperties::JordanDt)
    }

    pub fn dt18_6() -> DT18_6 {
        DigitalTopology::new(Adj18::new(), Adj6::new(), DigitalTopologyProperties::JordanDt)
    }

    pub fn dt6_26() -> DT6_26 {
        DigitalTopology::new(Adj6::new(), Adj26::new(), DigitalTopologyProperties::JordanDt)
    }

    pub fn dt26_6() -> DT26_6 {
        DigitalTopology::new(Adj26::new(), Adj6::new(), DigitalTopologyProperties::JordanDt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_swaps_roles() {
        let dt = z2i::dt4_8();
        let rev: z2i::DT8_4 = dt.reverse_topology();
        assert_eq!(rev, z2i::dt8_4());
        assert_eq!(rev.kappa(), dt.lambda());
        assert_eq!(rev.background(), dt.foreground());
        assert_eq!(rev.properties(), DigitalTopologyProperties::JordanDt);
        assert_eq!(rev.reverse_topology(), dt);
    }

    #[test]
    fn display() {
        assert_eq!(
            z3i::dt6_26().to_string(),
            "[DigitalTopology fg=[MetricAdjacency Z3 6] bg=[MetricAdjacency Z3 26] props=JordanDt]"
        );
    }
}

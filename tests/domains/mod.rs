use paramcomb::Domain;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Domain)]
pub enum AType {
    A1,
    A2,
    A3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Domain)]
pub enum BType {
    B1,
    B2,
    B3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Domain)]
pub enum CType {
    C1,
    C2,
    C3,
    C4,
    C5,
}

// Declared out of alphabetical order to pin declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Domain)]
pub enum Priority {
    High,
    Low,
    Critical,
}

#[derive(Clone, Debug, Domain)]
pub enum Unreachable {}

mod renamed {
    pub use paramcomb as combinations;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Domain)]
#[domain(crate = renamed::combinations)]
pub enum Toggle {
    Off,
    On,
}

use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::msdl_token_kind::MsdlTokenKind;

/// A set of token kinds, used to express FIRST/FOLLOW ("stopper") sets
/// at each grammar point. Backed by a bitmask over the `repr(u16)`
/// discriminants; the `+`/`-` operators build new sets, `+=`/`-=`
/// mutate in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MsdlTokenKindSet(u128);

impl MsdlTokenKindSet {
    pub fn new() -> Self {
        MsdlTokenKindSet(0)
    }

    pub fn from_kinds(kinds: &[MsdlTokenKind]) -> Self {
        let mut set = MsdlTokenKindSet::new();
        for kind in kinds {
            MsdlTokenKindSet::add(&mut set, *kind);
        }
        set
    }

    pub fn add(&mut self, kind: MsdlTokenKind) {
        self.0 |= bit(kind);
    }

    pub fn remove(&mut self, kind: MsdlTokenKind) {
        self.0 &= !bit(kind);
    }

    pub fn contains(&self, kind: MsdlTokenKind) -> bool {
        self.0 & bit(kind) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

fn bit(kind: MsdlTokenKind) -> u128 {
    1u128 << (kind as u16)
}

impl Add for MsdlTokenKindSet {
    type Output = MsdlTokenKindSet;

    fn add(self, rhs: MsdlTokenKindSet) -> MsdlTokenKindSet {
        MsdlTokenKindSet(self.0 | rhs.0)
    }
}

impl AddAssign for MsdlTokenKindSet {
    fn add_assign(&mut self, rhs: MsdlTokenKindSet) {
        self.0 |= rhs.0;
    }
}

impl Sub for MsdlTokenKindSet {
    type Output = MsdlTokenKindSet;

    fn sub(self, rhs: MsdlTokenKindSet) -> MsdlTokenKindSet {
        MsdlTokenKindSet(self.0 & !rhs.0)
    }
}

impl SubAssign for MsdlTokenKindSet {
    fn sub_assign(&mut self, rhs: MsdlTokenKindSet) {
        self.0 &= !rhs.0;
    }
}

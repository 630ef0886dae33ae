//! Kind-specific agent payload.
//!
//! Which attributes an agent carries depends on its social group: singles
//! always have a gender, family members have a role and a gender, couple
//! members have a gender only when the couple policy assigns one.  Encoding
//! this as an enum makes every consumer handle all three cases.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Short label used by renderers and CSV output.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Parent,
    Child,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Parent => "parent",
            Role::Child => "child",
        })
    }
}

/// The social group an agent was generated in, with its kind-specific data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Single { gender: Gender },
    Couple { gender: Option<Gender> },
    Family { role: Role, gender: Gender },
}

/// Payload-free discriminant of [`AgentKind`], handy as a map key.
///
/// Ordered the way the generator emits agents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KindTag {
    Couple,
    Single,
    Family,
}

impl KindTag {
    pub fn label(self) -> &'static str {
        match self {
            KindTag::Single => "single",
            KindTag::Couple => "couple",
            KindTag::Family => "family",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl AgentKind {
    #[inline]
    pub fn tag(&self) -> KindTag {
        match self {
            AgentKind::Single { .. } => KindTag::Single,
            AgentKind::Couple { .. } => KindTag::Couple,
            AgentKind::Family { .. } => KindTag::Family,
        }
    }

    /// Family role, `None` for singles and couples.
    #[inline]
    pub fn role(&self) -> Option<Role> {
        match *self {
            AgentKind::Family { role, .. } => Some(role),
            AgentKind::Single { .. } | AgentKind::Couple { .. } => None,
        }
    }

    #[inline]
    pub fn gender(&self) -> Option<Gender> {
        match *self {
            AgentKind::Single { gender } | AgentKind::Family { gender, .. } => Some(gender),
            AgentKind::Couple { gender } => gender,
        }
    }
}

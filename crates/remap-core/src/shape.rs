mod member;
pub use member::{get_fn, set_fn, Access, GetFn, Getter, Member, MemberId, SetFn, Setter};

mod registry;
pub use registry::Registry;

use crate::projection::Projection;
use crate::ty::Type;
use crate::value::Record;

use std::fmt;

/// Uniquely identifies a shape within a [`Registry`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeId(pub usize);

/// Describes one record-like type: an ordered list of named, typed members.
///
/// Shapes are built once, registered, and immutable thereafter; compiled
/// mappings reference their members by id for the life of the process.
#[derive(Debug)]
pub struct Shape {
    /// Uniquely identifies the shape within the registry
    pub id: ShapeId,

    /// The shape name
    pub name: String,

    /// Members in declaration order
    pub members: Vec<Member>,
}

impl Shape {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            members: vec![],
        }
    }

    /// Gets a member by declaration index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[track_caller]
    pub fn member(&self, index: usize) -> &Member {
        &self.members[index]
    }

    /// Finds a member by exact name.
    pub fn member_named(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.name == name)
    }

    /// A fresh instance of this shape with every slot `Null`.
    pub fn new_record(&self) -> Record {
        Record::empty(self.id, self.members.len())
    }
}

/// Builds a [`Shape`]; consumed by [`Registry::register`], which assigns the
/// shape and member identifiers.
#[derive(Default)]
pub struct Builder {
    name: String,
    members: Vec<(String, Type, Access)>,
}

impl Builder {
    /// Adds a slot-backed member: readable and writable, stored at the next
    /// declaration index.
    pub fn member(mut self, name: impl Into<String>, ty: impl Into<Type>) -> Self {
        self.members.push((name.into(), ty.into(), Access::Slot));
        self
    }

    /// Adds a function-backed member. Readable when `get` is present,
    /// writable when `set` is present.
    pub fn virtual_member(
        mut self,
        name: impl Into<String>,
        ty: impl Into<Type>,
        get: Option<GetFn>,
        set: Option<SetFn>,
    ) -> Self {
        self.members
            .push((name.into(), ty.into(), Access::Virtual { get, set }));
        self
    }

    /// Adds an accessor-backed member: read-only, resolved through a
    /// projection path.
    pub fn path_member(
        mut self,
        name: impl Into<String>,
        ty: impl Into<Type>,
        path: impl Into<Projection>,
    ) -> Self {
        self.members
            .push((name.into(), ty.into(), Access::Path(path.into())));
        self
    }

    pub(crate) fn build(self, id: ShapeId) -> Shape {
        let members = self
            .members
            .into_iter()
            .enumerate()
            .map(|(index, (name, ty, access))| Member {
                id: MemberId { shape: id, index },
                name,
                ty,
                access,
            })
            .collect();

        Shape {
            id,
            name: self.name,
            members,
        }
    }
}

impl From<&Self> for ShapeId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Shape> for ShapeId {
    fn from(val: &Shape) -> Self {
        val.id
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ShapeId({})", self.0)
    }
}

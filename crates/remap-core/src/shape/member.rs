use super::ShapeId;
use crate::projection::Projection;
use crate::ty::Type;
use crate::value::{Record, Value};
use crate::{Error, Result};

use std::fmt;
use std::sync::Arc;

/// A read accessor over a record instance.
pub type GetFn = Arc<dyn Fn(&Record) -> Value + Send + Sync>;

/// A write accessor over a record instance.
pub type SetFn = Arc<dyn Fn(&mut Record, Value) + Send + Sync>;

/// Wraps a closure as a [`GetFn`].
pub fn get_fn<F>(f: F) -> GetFn
where
    F: Fn(&Record) -> Value + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wraps a closure as a [`SetFn`].
pub fn set_fn<F>(f: F) -> SetFn
where
    F: Fn(&mut Record, Value) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A named, typed data slot on a shape: pure metadata plus accessor
/// factories. Descriptors are created once per shape and shared by reference
/// across every compiled mapping that touches them.
#[derive(Debug, Clone)]
pub struct Member {
    /// Uniquely identifies the member within the containing shape.
    pub id: MemberId,

    /// The member name
    pub name: String,

    /// The member value type
    pub ty: Type,

    /// How the member reads and writes its value
    pub access: Access,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MemberId {
    pub shape: ShapeId,
    pub index: usize,
}

/// Slot-backed, function-backed, or accessor-backed.
#[derive(Clone)]
pub enum Access {
    /// Reads and writes the record slot at the member's declaration index
    Slot,

    /// User-supplied closures; readable/writable as provided
    Virtual {
        get: Option<GetFn>,
        set: Option<SetFn>,
    },

    /// A read-only projection path
    Path(Projection),
}

impl Member {
    /// Gets the id.
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn can_read(&self) -> bool {
        match &self.access {
            Access::Slot | Access::Path(_) => true,
            Access::Virtual { get, .. } => get.is_some(),
        }
    }

    pub fn can_write(&self) -> bool {
        match &self.access {
            Access::Slot => true,
            Access::Virtual { set, .. } => set.is_some(),
            Access::Path(_) => false,
        }
    }

    /// Resolves the read accessor.
    pub fn getter(&self) -> Result<Getter> {
        match &self.access {
            Access::Slot => Ok(Getter::Slot(self.id.index)),
            Access::Virtual { get: Some(get), .. } => Ok(Getter::Fn(get.clone())),
            Access::Virtual { get: None, .. } => Err(Error::unsupported_operation(format!(
                "member `{}` is not readable",
                self.name
            ))),
            Access::Path(path) => Ok(Getter::Path(path.clone())),
        }
    }

    /// Resolves the write accessor.
    pub fn setter(&self) -> Result<Setter> {
        match &self.access {
            Access::Slot => Ok(Setter::Slot(self.id.index)),
            Access::Virtual { set: Some(set), .. } => Ok(Setter::Fn(set.clone())),
            Access::Virtual { set: None, .. } | Access::Path(_) => Err(
                Error::unsupported_operation(format!("member `{}` is not writable", self.name)),
            ),
        }
    }
}

// Two members are equal iff they live on the same shape under the same name
// and resolve through the same accessor.
impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.access.same_accessor(&other.access)
    }
}

impl Eq for Member {}

impl Access {
    fn same_accessor(&self, other: &Self) -> bool {
        match (self, other) {
            (Access::Slot, Access::Slot) => true,
            (
                Access::Virtual { get, set },
                Access::Virtual {
                    get: other_get,
                    set: other_set,
                },
            ) => ptr_eq(get, other_get) && ptr_eq_set(set, other_set),
            (Access::Path(path), Access::Path(other_path)) => path == other_path,
            _ => false,
        }
    }
}

fn ptr_eq(a: &Option<GetFn>, b: &Option<GetFn>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

fn ptr_eq_set(a: &Option<SetFn>, b: &Option<SetFn>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// A resolved read accessor, bound to a member and reusable across calls.
#[derive(Clone)]
pub enum Getter {
    Slot(usize),
    Fn(GetFn),
    Path(Projection),
}

impl Getter {
    pub fn read(&self, record: &Record) -> Result<Value> {
        match self {
            Getter::Slot(index) => record
                .get(*index)
                .cloned()
                .ok_or_else(|| crate::err!("record has no slot {index}")),
            Getter::Fn(get) => Ok(get(record)),
            Getter::Path(path) => path
                .resolve(record)
                .cloned()
                .ok_or_else(|| crate::err!("projection {:?} does not resolve", path.as_slice())),
        }
    }
}

/// A resolved write accessor.
#[derive(Clone)]
pub enum Setter {
    Slot(usize),
    Fn(SetFn),
}

impl Setter {
    pub fn write(&self, record: &mut Record, value: Value) -> Result<()> {
        match self {
            Setter::Slot(index) => match record.get_mut(*index) {
                Some(slot) => {
                    *slot = value;
                    Ok(())
                }
                None => Err(crate::err!("record has no slot {index}")),
            },
            Setter::Fn(set) => {
                set(record, value);
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Access {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Slot => fmt.write_str("Slot"),
            Access::Virtual { get, set } => fmt
                .debug_struct("Virtual")
                .field("get", &get.is_some())
                .field("set", &set.is_some())
                .finish(),
            Access::Path(path) => fmt.debug_tuple("Path").field(path).finish(),
        }
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Getter::Slot(index) => fmt.debug_tuple("Slot").field(index).finish(),
            Getter::Fn(_) => fmt.write_str("Fn(..)"),
            Getter::Path(path) => fmt.debug_tuple("Path").field(path).finish(),
        }
    }
}

impl fmt::Debug for Setter {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setter::Slot(index) => fmt.debug_tuple("Slot").field(index).finish(),
            Setter::Fn(_) => fmt.write_str("Fn(..)"),
        }
    }
}

impl From<&Self> for MemberId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Member> for MemberId {
    fn from(val: &Member) -> Self {
        val.id
    }
}

impl fmt::Debug for MemberId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "MemberId({}/{})", self.shape.0, self.index)
    }
}

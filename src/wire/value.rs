use std::fmt;

use indexmap::IndexMap;

use crate::wire::{DecodeError, Result};

/// Runtime value emitted by decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `N;`
	Null,
	/// Signed integer scalar.
	Int(i64),
	/// 64-bit float scalar.
	Float(f64),
	/// Boolean scalar.
	Bool(bool),
	/// UTF-8 lossy decoded string.
	String(Box<str>),
	/// Materialized `a:N:{...}` composite.
	Composite(Composite),
}

/// Output shape chosen for one decoded composite.
#[derive(Debug, Clone, PartialEq)]
pub enum Composite {
	/// Dense `0..len` keyed composite with keys dropped.
	Sequence(Vec<Value>),
	/// Ordered key-preserving mapping.
	Mapping(Mapping),
	/// Ordered fields keyed by each key's display form.
	Record(Record),
}

/// Composite key. Only integers and strings are accepted in key position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
	/// Integer key.
	Int(i64),
	/// String key.
	Str(Box<str>),
}

/// One mapping entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
	/// Entry key.
	pub key: Key,
	/// Entry value.
	pub value: Value,
}

/// Ordered mapping with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
	entries: Vec<Entry>,
}

/// One named record field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	/// Key display form.
	pub name: Box<str>,
	/// Field value.
	pub value: Value,
}

/// Ordered record with unique field names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	fields: Vec<Field>,
}

impl Value {
	/// Empty record, the default stand-in for zero-entry composites.
	pub fn empty_record() -> Self {
		Self::Composite(Composite::Record(Record::default()))
	}

	/// Short lowercase label for the value's kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Bool(_) => "bool",
			Self::String(_) => "string",
			Self::Composite(item) => item.kind(),
		}
	}

	/// Return `true` for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Integer payload, if any.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Float payload, if any.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Boolean payload, if any.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// String payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Sequence items, if this is a dense sequence.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Composite(Composite::Sequence(items)) => Some(items),
			_ => None,
		}
	}

	/// Mapping payload, if any.
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Self::Composite(Composite::Mapping(map)) => Some(map),
			_ => None,
		}
	}

	/// Record payload, if any.
	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Self::Composite(Composite::Record(record)) => Some(record),
			_ => None,
		}
	}
}

impl Composite {
	/// Short lowercase label for the composite shape.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Sequence(_) => "sequence",
			Self::Mapping(_) => "mapping",
			Self::Record(_) => "record",
		}
	}

	/// Number of items, entries, or fields.
	pub fn len(&self) -> usize {
		match self {
			Self::Sequence(items) => items.len(),
			Self::Mapping(map) => map.len(),
			Self::Record(record) => record.len(),
		}
	}

	/// Return `true` when the composite holds nothing.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Move nested composites out into `pending`, dropping scalars in place.
	fn take_children(&mut self, pending: &mut Vec<Composite>) {
		let children: Vec<Value> = match self {
			Self::Sequence(items) => std::mem::take(items),
			Self::Mapping(map) => std::mem::take(&mut map.entries).into_iter().map(|entry| entry.value).collect(),
			Self::Record(record) => std::mem::take(&mut record.fields).into_iter().map(|field| field.value).collect(),
		};
		pending.extend(children.into_iter().filter_map(|child| match child {
			Value::Composite(inner) => Some(inner),
			_ => None,
		}));
	}
}

// Nested composites are released from a heap worklist, not one native frame per level.
impl Drop for Composite {
	fn drop(&mut self) {
		let mut pending = Vec::new();
		self.take_children(&mut pending);
		while let Some(mut inner) = pending.pop() {
			inner.take_children(&mut pending);
		}
	}
}

impl Key {
	/// Convert a decoded value read in key position.
	pub(crate) fn from_value(value: Value, at: usize) -> Result<Self> {
		match value {
			Value::Int(v) => Ok(Self::Int(v)),
			Value::String(v) => Ok(Self::Str(v)),
			other => Err(DecodeError::InvalidKey { kind: other.kind(), at }),
		}
	}

	/// Integer key, if any.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Int(v) => Some(*v),
			Self::Str(_) => None,
		}
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(v) => write!(f, "{v}"),
			Self::Str(v) => f.write_str(v),
		}
	}
}

impl From<i64> for Key {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<&str> for Key {
	fn from(value: &str) -> Self {
		Self::Str(value.into())
	}
}

impl Mapping {
	/// Build a mapping from decoded pairs; a repeated key overwrites the earlier value in place.
	pub fn from_pairs(pairs: Vec<(Key, Value)>) -> Self {
		let mut slots: IndexMap<Key, Value> = IndexMap::with_capacity(pairs.len());
		for (key, value) in pairs {
			slots.insert(key, value);
		}
		let entries = slots.into_iter().map(|(key, value)| Entry { key, value }).collect();
		Self { entries }
	}

	/// Number of unique keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Return `true` when no entries exist.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in first-insertion order.
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Iterate `(key, value)` pairs in first-insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
		self.entries.iter().map(|entry| (&entry.key, &entry.value))
	}

	/// Look up a value by key.
	pub fn get(&self, key: &Key) -> Option<&Value> {
		self.entries.iter().find(|entry| &entry.key == key).map(|entry| &entry.value)
	}

	/// Return `true` when the keys are exactly the integers `0..len`.
	pub fn is_dense_sequence(&self) -> bool {
		let len = self.entries.len();
		// Keys are unique, so counting in-range integer keys is enough.
		let in_range = self
			.entries
			.iter()
			.filter(|entry| matches!(entry.key, Key::Int(k) if usize::try_from(k).is_ok_and(|idx| idx < len)))
			.count();
		in_range == len
	}

	/// Values ordered by numeric key when dense, otherwise the mapping back unchanged.
	pub fn into_sequence(self) -> std::result::Result<Vec<Value>, Self> {
		if !self.is_dense_sequence() {
			return Err(self);
		}

		let len = self.entries.len();
		let mut slots: Vec<Option<Value>> = (0..len).map(|_| None).collect();
		for entry in self.entries {
			if let Key::Int(k) = entry.key
				&& let Ok(idx) = usize::try_from(k)
			{
				slots[idx] = Some(entry.value);
			}
		}
		Ok(slots.into_iter().flatten().collect())
	}

	/// Re-key entries by display form; colliding names keep the later value.
	pub fn into_record(self) -> Record {
		let mut slots: IndexMap<Box<str>, Value> = IndexMap::with_capacity(self.entries.len());
		for entry in self.entries {
			let name: Box<str> = match entry.key {
				Key::Str(text) => text,
				Key::Int(v) => v.to_string().into_boxed_str(),
			};
			slots.insert(name, entry.value);
		}
		let fields = slots.into_iter().map(|(name, value)| Field { name, value }).collect();
		Record { fields }
	}
}

impl Record {
	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Return `true` when no fields exist.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Fields in first-insertion order.
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Iterate `(name, value)` pairs in first-insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().map(|field| (field.name.as_ref(), &field.value))
	}

	/// Look up a field by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}
}

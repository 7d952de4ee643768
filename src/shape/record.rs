//! Record shapes
//!
//! A [`RecordShape`] is the mapping table for one record type: an ordered
//! list of fields, each with its metadata and a typed setter that writes
//! the converted value straight into the record.

use super::types::{FieldMeta, FieldTags};
use super::value::FieldValue;
use crate::decode::{resolve_column, Header, ResolvedColumn};
use crate::error::Result;
use crate::types::CellValue;
use std::fmt;

type Setter<T> = Box<dyn Fn(&mut T, CellValue) -> bool + Send + Sync>;

// ============================================================================
// Field Spec
// ============================================================================

/// One field of a record shape
pub struct FieldSpec<T> {
    meta: FieldMeta,
    setter: Setter<T>,
}

impl<T: 'static> FieldSpec<T> {
    /// Create a field whose declared type is taken from the setter's value type
    pub fn new<V, F>(name: impl Into<String>, tags: FieldTags, setter: F) -> Self
    where
        V: FieldValue + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        Self {
            meta: FieldMeta::new(name, V::KIND, tags),
            setter: Box::new(move |record: &mut T, value: CellValue| match V::from_cell(value) {
                Some(v) => {
                    setter(record, v);
                    true
                }
                None => false,
            }),
        }
    }
}

impl<T> FieldSpec<T> {
    /// Field metadata
    pub fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    /// Field name
    pub fn name(&self) -> &str {
        self.meta.name()
    }

    /// Write a converted value into the record, `false` if it does not fit
    pub(crate) fn assign(&self, record: &mut T, value: CellValue) -> bool {
        (self.setter)(record, value)
    }
}

impl<T> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Record Shape
// ============================================================================

/// Ordered field mapping for a record type
pub struct RecordShape<T> {
    fields: Vec<FieldSpec<T>>,
}

impl<T: 'static> RecordShape<T> {
    /// Start building a shape
    pub fn builder() -> RecordShapeBuilder<T> {
        RecordShapeBuilder::new()
    }
}

impl<T> RecordShape<T> {
    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec<T>] {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the shape has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check every field's tags
    pub fn validate(&self) -> Result<()> {
        self.fields.iter().try_for_each(|field| field.meta().validate())
    }

    /// Resolve the column of every field against a header
    pub fn resolve_columns(&self, header: &Header) -> Result<Vec<ResolvedColumn>> {
        self.fields
            .iter()
            .enumerate()
            .map(|(position, field)| resolve_column(position, field.meta(), header))
            .collect()
    }
}

impl<T> fmt::Debug for RecordShape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordShape")
            .field("fields", &self.fields)
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`RecordShape`]
///
/// ```rust,ignore
/// let shape = RecordShape::<Contact>::builder()
///     .field("name", |c: &mut Contact, v: String| c.name = v)
///     .tagged("email", FieldTags::new().header("email"), |c: &mut Contact, v: String| c.email = v)
///     .date("born", "%Y-%m-%d", |c: &mut Contact, v: NaiveDate| c.born = v)
///     .build();
/// ```
pub struct RecordShapeBuilder<T> {
    fields: Vec<FieldSpec<T>>,
}

impl<T: 'static> RecordShapeBuilder<T> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add an untagged field, read from its declaration-order column
    #[must_use]
    pub fn field<V, F>(self, name: impl Into<String>, setter: F) -> Self
    where
        V: FieldValue + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.tagged(name, FieldTags::new(), setter)
    }

    /// Add a field with explicit tags
    #[must_use]
    pub fn tagged<V, F>(mut self, name: impl Into<String>, tags: FieldTags, setter: F) -> Self
    where
        V: FieldValue + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.fields.push(FieldSpec::new(name, tags, setter));
        self
    }

    /// Add a date-time field parsed with `format`
    #[must_use]
    pub fn date<V, F>(self, name: impl Into<String>, format: impl Into<String>, setter: F) -> Self
    where
        V: FieldValue + 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.tagged(name, FieldTags::new().date_format(format), setter)
    }

    /// Add a prepared field
    #[must_use]
    pub fn push(mut self, field: FieldSpec<T>) -> Self {
        self.fields.push(field);
        self
    }

    /// Finish the shape
    pub fn build(self) -> RecordShape<T> {
        RecordShape {
            fields: self.fields,
        }
    }
}

impl<T: 'static> Default for RecordShapeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

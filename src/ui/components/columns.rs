use crate::domain::entities::query::SortColumn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnField {
    Name,
    CreatedAt,
    UpdatedAt,
    Actions,
}

/// Explicit descriptor for one table column. The listing renders exactly
/// these columns, in this order; there is no per-column filter, and the
/// actions column never sorts or searches.
pub struct ColumnDescriptor {
    pub field: ColumnField,
    pub label: &'static str,
    pub sortable: bool,
    pub searchable: bool,
    pub width_portion: u16,
}

impl ColumnDescriptor {
    #[must_use]
    pub const fn sort_column(&self) -> Option<SortColumn> {
        match self.field {
            ColumnField::Name => Some(SortColumn::Name),
            ColumnField::CreatedAt => Some(SortColumn::CreatedAt),
            ColumnField::UpdatedAt => Some(SortColumn::UpdatedAt),
            ColumnField::Actions => None,
        }
    }
}

pub const COLUMNS: [ColumnDescriptor; 4] = [
    ColumnDescriptor {
        field: ColumnField::Name,
        label: "Application Name",
        sortable: true,
        searchable: true,
        width_portion: 3,
    },
    ColumnDescriptor {
        field: ColumnField::CreatedAt,
        label: "Upload Timestamp",
        sortable: true,
        searchable: true,
        width_portion: 2,
    },
    ColumnDescriptor {
        field: ColumnField::UpdatedAt,
        label: "Update Timestamp",
        sortable: true,
        searchable: true,
        width_portion: 2,
    },
    ColumnDescriptor {
        field: ColumnField::Actions,
        label: "Actions",
        sortable: false,
        searchable: false,
        width_portion: 2,
    },
];

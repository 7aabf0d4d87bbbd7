//! Raw value → cell view model projection.
//!
//! The projector dispatches on the field kind, and for numeric and computed
//! kinds on the runtime cell value type. Cells of computed fields, and all
//! cells without edit permission, are read-only. Kinds the grid cannot
//! render project to [`CellViewModel::Loading`].

use std::cell::RefCell;
use std::rc::Rc;

use tess_core::enums::{CellValueType, EditorPosition, TextShowAsType};
use tess_core::field::{
    DateFormatting, FieldDescriptor, FieldKind, RatingOptions, SelectOptions,
};
use tess_core::record::Record;
use tess_core::value::{CellValue, to_list};
use tess_core::view_model::{
    CellViewModel, ClickAction, EditorCapability, ImageItem, NumberShowAsView, SelectChoiceView,
};

use crate::cache::{DisplayValueCache, date_cache_key};
use crate::collaborators::Collaborators;

/// Turns record values into cell view models for one set of fields.
///
/// Column `i` of the projector is the `i`-th present field, matching the
/// columns produced by [`crate::project_columns`] for the same list.
#[derive(Debug, Clone)]
pub struct CellValueProjector {
    fields: Vec<FieldDescriptor>,
    editable: bool,
    untitled_label: String,
    cache: Rc<RefCell<DisplayValueCache>>,
    collaborators: Collaborators,
}

impl CellValueProjector {
    #[must_use]
    pub fn new(
        fields: &[Option<FieldDescriptor>],
        editable: bool,
        untitled_label: impl Into<String>,
        cache: Rc<RefCell<DisplayValueCache>>,
        collaborators: Collaborators,
    ) -> Self {
        Self {
            fields: fields.iter().flatten().cloned().collect(),
            editable,
            untitled_label: untitled_label.into(),
            cache,
            collaborators,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub const fn editable(&self) -> bool {
        self.editable
    }

    /// Cell for `record` in column `col`. Out-of-range columns are loading.
    #[must_use]
    pub fn project(&self, record: &dyn Record, col: usize) -> CellViewModel {
        self.project_field(self.fields.get(col), record)
    }

    /// All cells of `record`, in column order.
    #[must_use]
    pub fn project_row(&self, record: &dyn Record) -> Vec<CellViewModel> {
        self.fields
            .iter()
            .map(|field| self.project_field(Some(field), record))
            .collect()
    }

    /// Cell for one field of `record`.
    #[must_use]
    pub fn project_field(
        &self,
        field: Option<&FieldDescriptor>,
        record: &dyn Record,
    ) -> CellViewModel {
        let Some(field) = field else {
            return CellViewModel::Loading;
        };
        let value = record.cell_value(&field.id);
        let value = value.as_ref();
        let readonly = field.is_computed || !self.editable;

        match &field.kind {
            FieldKind::SingleLineText { options } => match options.show_as {
                Some(show_as) => self.link_cell(field, value, show_as.kind, readonly),
                None => self.text_cell(field, value, readonly, false),
            },
            FieldKind::LongText => self.text_cell(field, value, readonly, true),
            FieldKind::Date { options } => {
                self.date_cell(field, &options.formatting, value, record, readonly)
            }
            FieldKind::Number { .. } | FieldKind::Rollup { .. } | FieldKind::Formula { .. } => {
                self.computed_cell(field, value, record, readonly)
            }
            FieldKind::SingleSelect { options } | FieldKind::MultipleSelect { options } => {
                self.select_cell(field, options, value, readonly)
            }
            FieldKind::Link { .. } => self.link_record_cell(field, value, record, readonly),
            FieldKind::Attachment => self.attachment_cell(field, value, record, readonly),
            FieldKind::Checkbox => CellViewModel::Boolean {
                data: bool_data(value),
                readonly,
                is_multiple: field.is_multiple_cell_value,
            },
            FieldKind::Rating { options } => self.rating_cell(field, options, value, readonly),
            FieldKind::User
            | FieldKind::AutoNumber
            | FieldKind::CreatedTime
            | FieldKind::LastModifiedTime
            | FieldKind::Unknown => CellViewModel::Loading,
        }
    }

    /// Forward a click on reference text to the opener.
    pub fn click(&self, action: &ClickAction, text: &str) {
        match action {
            ClickAction::OpenReference { show_as } => {
                self.collaborators.opener.open(*show_as, text);
            }
        }
    }

    fn display(&self, field: &FieldDescriptor, value: Option<&CellValue>) -> String {
        self.collaborators.formatter.cell_value_to_string(field, value)
    }

    fn text_cell(
        &self,
        field: &FieldDescriptor,
        value: Option<&CellValue>,
        readonly: bool,
        is_wrap: bool,
    ) -> CellViewModel {
        CellViewModel::Text {
            data: text_data(value),
            display_data: self.display(field, value),
            readonly,
            is_wrap,
            editor_position: None,
            editor: None,
        }
    }

    fn link_cell(
        &self,
        field: &FieldDescriptor,
        value: Option<&CellValue>,
        show_as: TextShowAsType,
        readonly: bool,
    ) -> CellViewModel {
        CellViewModel::Link {
            data: to_list(value),
            display_data: self.display(field, value),
            readonly,
            on_click: ClickAction::OpenReference { show_as },
        }
    }

    fn date_cell(
        &self,
        field: &FieldDescriptor,
        formatting: &DateFormatting,
        value: Option<&CellValue>,
        record: &dyn Record,
        readonly: bool,
    ) -> CellViewModel {
        let key = date_cache_key(&field.id, value, formatting);
        let cached = self.cache.borrow_mut().get(&key);
        let display_data = if let Some(hit) = cached {
            tracing::trace!(%key, "display cache hit");
            hit
        } else {
            tracing::trace!(%key, "display cache miss");
            let formatted = self.display(field, value);
            self.cache.borrow_mut().set(key, formatted.clone());
            formatted
        };

        CellViewModel::Text {
            data: text_data(value),
            display_data,
            readonly,
            is_wrap: false,
            editor_position: Some(EditorPosition::Below),
            editor: Some(EditorCapability::Date {
                field_id: field.id.clone(),
                record_id: record.id().to_string(),
            }),
        }
    }

    fn computed_cell(
        &self,
        field: &FieldDescriptor,
        value: Option<&CellValue>,
        record: &dyn Record,
        readonly: bool,
    ) -> CellViewModel {
        match field.cell_value_type {
            CellValueType::Boolean => CellViewModel::Boolean {
                data: bool_data(value),
                readonly,
                is_multiple: field.is_multiple_cell_value,
            },
            CellValueType::DateTime => self.text_cell(field, value, readonly, false),
            CellValueType::String => match field.text_show_as() {
                Some(show_as) => self.link_cell(field, value, show_as.kind, readonly),
                None => self.text_cell(field, value, readonly, false),
            },
            CellValueType::Number => self.number_cell(field, value, record, readonly),
        }
    }

    fn number_cell(
        &self,
        field: &FieldDescriptor,
        value: Option<&CellValue>,
        record: &dyn Record,
        readonly: bool,
    ) -> CellViewModel {
        let show_as = field.number_show_as().map(|show_as| NumberShowAsView {
            kind: show_as.kind,
            color: show_as.color.hex().to_string(),
            show_value: show_as.show_value,
            max_value: show_as.max_value,
        });

        if let (Some(show_as), true, Some(CellValue::List(items))) =
            (&show_as, field.is_multiple_cell_value, value)
        {
            return CellViewModel::Chart {
                data: items.iter().filter_map(CellValue::as_number).collect(),
                display_data: items
                    .iter()
                    .map(|item| self.collaborators.formatter.item_to_string(field, item))
                    .collect(),
                readonly,
                chart_type: show_as.kind.chart_type(),
                color: show_as.color.clone(),
            };
        }

        let data = number_data(value);
        CellViewModel::Number {
            data,
            display_data: self.display(field, value),
            readonly,
            show_as,
            editor: Some(EditorCapability::Number {
                field_id: field.id.clone(),
                record_id: record.id().to_string(),
                value: data,
                formatting: field.number_formatting().cloned().unwrap_or_default(),
            }),
        }
    }

    fn select_cell(
        &self,
        field: &FieldDescriptor,
        options: &SelectOptions,
        value: Option<&CellValue>,
        readonly: bool,
    ) -> CellViewModel {
        let data = to_list(value)
            .iter()
            .map(|item| match item {
                CellValue::Text(name) => name.clone(),
                other => self.collaborators.formatter.item_to_string(field, other),
            })
            .collect();
        let choices = options
            .choices
            .iter()
            .map(|choice| SelectChoiceView {
                id: choice.id.clone(),
                name: choice.name.clone(),
                bg_color: Some(choice.color.hex().to_string()),
                text_color: Some(choice.color.text_hex().to_string()),
            })
            .collect();

        CellViewModel::Select {
            data,
            choices,
            readonly,
            is_multiple: field.is_multiple_cell_value,
            editor_position: EditorPosition::Below,
            editor: None,
        }
    }

    fn link_record_cell(
        &self,
        field: &FieldDescriptor,
        value: Option<&CellValue>,
        record: &dyn Record,
        readonly: bool,
    ) -> CellViewModel {
        let items = to_list(value);
        let links = items.iter().filter_map(|item| match item {
            CellValue::Link(link) => Some(link),
            _ => None,
        });

        let mut data = Vec::new();
        let mut choices = Vec::new();
        for link in links {
            let title = link.title.clone().unwrap_or_default();
            data.push(if title.is_empty() {
                self.untitled_label.clone()
            } else {
                title.clone()
            });
            choices.push(SelectChoiceView {
                id: Some(link.id.clone()),
                name: title,
                bg_color: None,
                text_color: None,
            });
        }

        CellViewModel::Select {
            data,
            choices,
            readonly,
            is_multiple: field.is_multiple_cell_value,
            editor_position: EditorPosition::Below,
            editor: Some(EditorCapability::Link {
                field_id: field.id.clone(),
                record_id: record.id().to_string(),
            }),
        }
    }

    fn attachment_cell(
        &self,
        field: &FieldDescriptor,
        value: Option<&CellValue>,
        record: &dyn Record,
        readonly: bool,
    ) -> CellViewModel {
        let data: Vec<ImageItem> = to_list(value)
            .iter()
            .filter_map(|item| match item {
                CellValue::Attachment(attachment) => Some(ImageItem {
                    id: attachment.id.clone(),
                    url: self
                        .collaborators
                        .covers
                        .cover_url(&attachment.mimetype, &attachment.url),
                }),
                _ => None,
            })
            .collect();
        let display_data = data.iter().map(|image| image.url.clone()).collect();

        CellViewModel::Image {
            data,
            display_data,
            readonly,
            editor: Some(EditorCapability::Attachment {
                field_id: field.id.clone(),
                record_id: record.id().to_string(),
            }),
        }
    }

    fn rating_cell(
        &self,
        field: &FieldDescriptor,
        options: &RatingOptions,
        value: Option<&CellValue>,
        readonly: bool,
    ) -> CellViewModel {
        if field.is_multiple_cell_value {
            return CellViewModel::Number {
                data: number_data(value),
                display_data: self.display(field, value),
                readonly,
                show_as: None,
                editor: None,
            };
        }

        CellViewModel::Rating {
            data: value.and_then(CellValue::as_number).unwrap_or(0.0),
            readonly,
            icon: options.icon,
            color: options.color.hex().to_string(),
            max: options.max,
        }
    }
}

fn text_data(value: Option<&CellValue>) -> String {
    value
        .and_then(CellValue::as_text)
        .map(str::to_string)
        .unwrap_or_default()
}

/// A boolean cell is checked when its value, or any item of a list value,
/// is `true`.
fn bool_data(value: Option<&CellValue>) -> bool {
    match value {
        Some(CellValue::Bool(b)) => *b,
        Some(CellValue::List(items)) => items.iter().any(|item| item.as_bool() == Some(true)),
        _ => false,
    }
}

/// Scalar numbers pass through; lists contribute their first numeric item.
fn number_data(value: Option<&CellValue>) -> Option<f64> {
    match value {
        Some(CellValue::Number(n)) => Some(*n),
        Some(CellValue::List(items)) => items.iter().find_map(CellValue::as_number),
        _ => None,
    }
}

/// Apply a number editor's result to its record.
///
/// Returns `false` without writing when the capability is not a number
/// editor or is bound to a different record.
pub fn commit_number_edit(
    record: &dyn Record,
    editor: &EditorCapability,
    value: Option<f64>,
) -> bool {
    match editor {
        EditorCapability::Number {
            field_id,
            record_id,
            ..
        } if record_id == record.id() => {
            record.update_cell(field_id, value.map(CellValue::Number));
            true
        }
        other => {
            tracing::debug!(
                field_id = other.field_id(),
                record_id = other.record_id(),
                "ignoring number edit for a non-matching editor"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tess_core::color::Color;
    use tess_core::enums::{ChartType, NumberDisplayType};
    use tess_core::field::{
        Choice, ComputedOptions, ComputedShowAs, NumberOptions, NumberShowAs, TextOptions,
        TextShowAs,
    };
    use tess_core::record::MemoryRecord;
    use tess_core::value::{AttachmentItem, LinkRef};
    use tess_core::view_model::CellKind;

    fn projector(fields: Vec<FieldDescriptor>, editable: bool) -> CellValueProjector {
        let fields: Vec<_> = fields.into_iter().map(Some).collect();
        CellValueProjector::new(
            &fields,
            editable,
            "Untitled",
            Rc::new(RefCell::new(DisplayValueCache::default())),
            Collaborators::default(),
        )
    }

    fn number_field(id: &str) -> FieldDescriptor {
        FieldDescriptor::new(
            id,
            "Amount",
            FieldKind::Number {
                options: NumberOptions::default(),
            },
        )
    }

    fn line_show_as() -> NumberShowAs {
        NumberShowAs {
            kind: NumberDisplayType::Line,
            color: "tealBright".parse().unwrap(),
            show_value: true,
            max_value: None,
        }
    }

    #[test]
    fn plain_text_and_long_text() {
        let p = projector(
            vec![
                FieldDescriptor::new(
                    "fldName",
                    "Name",
                    FieldKind::SingleLineText {
                        options: TextOptions::default(),
                    },
                ),
                FieldDescriptor::new("fldNotes", "Notes", FieldKind::LongText),
            ],
            true,
        );
        let record = MemoryRecord::new("rec1")
            .with_cell("fldName", CellValue::Text("Ada".into()))
            .with_cell("fldNotes", CellValue::Text("line one".into()));

        assert_eq!(
            p.project(&record, 0),
            CellViewModel::Text {
                data: "Ada".into(),
                display_data: "Ada".into(),
                readonly: false,
                is_wrap: false,
                editor_position: None,
                editor: None,
            }
        );
        assert!(matches!(
            p.project(&record, 1),
            CellViewModel::Text { is_wrap: true, .. }
        ));
    }

    #[test]
    fn text_with_show_as_becomes_link() {
        let field = FieldDescriptor::new(
            "fldSite",
            "Site",
            FieldKind::SingleLineText {
                options: TextOptions {
                    show_as: Some(TextShowAs {
                        kind: TextShowAsType::Url,
                    }),
                },
            },
        );
        let p = projector(vec![field], true);
        let record = MemoryRecord::new("rec1")
            .with_cell("fldSite", CellValue::Text("example.com".into()));

        assert_eq!(
            p.project(&record, 0),
            CellViewModel::Link {
                data: vec![CellValue::Text("example.com".into())],
                display_data: "example.com".into(),
                readonly: false,
                on_click: ClickAction::OpenReference {
                    show_as: TextShowAsType::Url,
                },
            }
        );
    }

    #[test]
    fn link_display_renders_titles_not_ids() {
        let field = FieldDescriptor::new(
            "fldRef",
            "Ref",
            FieldKind::SingleLineText {
                options: TextOptions {
                    show_as: Some(TextShowAs {
                        kind: TextShowAsType::Url,
                    }),
                },
            },
        );
        let p = projector(vec![field], true);
        let record = MemoryRecord::new("rec1").with_cell(
            "fldRef",
            CellValue::List(vec![CellValue::Link(LinkRef {
                id: "recX".into(),
                title: Some("Alpha".into()),
            })]),
        );

        let CellViewModel::Link { display_data, .. } = p.project(&record, 0) else {
            panic!("show-as text projects to a link cell");
        };
        assert_eq!(display_data, "Alpha");
    }

    #[test]
    fn readonly_when_computed_or_not_editable() {
        let record = MemoryRecord::new("rec1").with_cell("f", CellValue::Number(1.0));

        let editable = projector(vec![number_field("f")], true);
        assert_eq!(editable.project(&record, 0).readonly(), Some(false));

        let locked = projector(vec![number_field("f")], false);
        assert_eq!(locked.project(&record, 0).readonly(), Some(true));

        let computed = projector(vec![number_field("f").computed()], true);
        assert_eq!(computed.project(&record, 0).readonly(), Some(true));
    }

    #[test]
    fn number_cell_binds_editor() {
        let p = projector(vec![number_field("fldAmt")], true);
        let record = MemoryRecord::new("rec7").with_cell("fldAmt", CellValue::Number(12.0));

        let cell = p.project(&record, 0);
        let CellViewModel::Number {
            data,
            display_data,
            editor,
            show_as,
            ..
        } = &cell
        else {
            panic!("expected number cell, got {cell:?}");
        };
        assert_eq!(*data, Some(12.0));
        assert_eq!(display_data, "12.00");
        assert!(show_as.is_none());
        assert_eq!(editor.as_ref().map(EditorCapability::record_id), Some("rec7"));
    }

    #[test]
    fn multi_value_number_with_show_as_is_chart() {
        let field = FieldDescriptor::new(
            "fldTrend",
            "Trend",
            FieldKind::Rollup {
                options: ComputedOptions {
                    show_as: Some(ComputedShowAs::Number(line_show_as())),
                    ..ComputedOptions::default()
                },
            },
        )
        .with_cell_value_type(CellValueType::Number)
        .computed()
        .multiple();
        let p = projector(vec![field], true);
        let record = MemoryRecord::new("rec1").with_cell(
            "fldTrend",
            CellValue::List(vec![CellValue::Number(1.0), CellValue::Number(3.0)]),
        );

        let cell = p.project(&record, 0);
        assert_eq!(
            cell,
            CellViewModel::Chart {
                data: vec![1.0, 3.0],
                display_data: vec!["1".into(), "3".into()],
                readonly: true,
                chart_type: ChartType::Line,
                color: "tealBright".parse::<Color>().unwrap().hex().to_string(),
            }
        );
    }

    #[test]
    fn multi_value_number_without_show_as_takes_first_number() {
        let field = number_field("fldN").multiple();
        let p = projector(vec![field], true);
        let record = MemoryRecord::new("rec1").with_cell(
            "fldN",
            CellValue::List(vec![CellValue::Number(4.0), CellValue::Number(5.0)]),
        );
        let cell = p.project(&record, 0);
        assert!(matches!(
            cell,
            CellViewModel::Number { data: Some(n), ref display_data, .. }
                if n == 4.0 && display_data == "4.00, 5.00"
        ));
    }

    #[test]
    fn computed_branches_follow_cell_value_type() {
        let formula = |cvt: CellValueType| {
            FieldDescriptor::new(
                "fldF",
                "F",
                FieldKind::Formula {
                    options: ComputedOptions::default(),
                },
            )
            .with_cell_value_type(cvt)
            .computed()
        };
        let record = MemoryRecord::new("rec1").with_cell("fldF", CellValue::Bool(true));

        let boolean = projector(vec![formula(CellValueType::Boolean)], true);
        assert_eq!(
            boolean.project(&record, 0),
            CellViewModel::Boolean {
                data: true,
                readonly: true,
                is_multiple: false,
            }
        );

        let date = projector(vec![formula(CellValueType::DateTime)], true);
        assert_eq!(date.project(&record, 0).kind(), CellKind::Text);

        let text = projector(vec![formula(CellValueType::String)], true);
        assert_eq!(text.project(&record, 0).kind(), CellKind::Text);
    }

    #[test]
    fn select_choices_resolve_colors() {
        let dark: Color = "redDark1".parse().unwrap();
        let light: Color = "yellowLight2".parse().unwrap();
        let field = FieldDescriptor::new(
            "fldTags",
            "Tags",
            FieldKind::MultipleSelect {
                options: SelectOptions {
                    choices: vec![Choice::new("Urgent", dark), Choice::new("Later", light)],
                },
            },
        )
        .multiple();
        let p = projector(vec![field], true);
        let record = MemoryRecord::new("rec1").with_cell(
            "fldTags",
            CellValue::List(vec![CellValue::Text("Urgent".into())]),
        );

        let CellViewModel::Select {
            data,
            choices,
            is_multiple,
            editor_position,
            ..
        } = p.project(&record, 0)
        else {
            panic!("expected select cell");
        };
        assert_eq!(data, vec!["Urgent".to_string()]);
        assert!(is_multiple);
        assert_eq!(editor_position, EditorPosition::Below);
        assert_eq!(choices[0].bg_color.as_deref(), Some(dark.hex()));
        assert_eq!(choices[0].text_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(choices[1].text_color.as_deref(), Some("#000000"));
    }

    #[test]
    fn links_fall_back_to_untitled() {
        let field = FieldDescriptor::new(
            "fldLink",
            "Owner",
            FieldKind::Link {
                options: tess_core::field::LinkOptions::default(),
            },
        );
        let p = projector(vec![field], true);
        let record = MemoryRecord::new("rec1").with_cell(
            "fldLink",
            CellValue::List(vec![
                CellValue::Link(LinkRef {
                    id: "recA".into(),
                    title: Some("Alpha".into()),
                }),
                CellValue::Link(LinkRef {
                    id: "recB".into(),
                    title: None,
                }),
            ]),
        );

        let cell = p.project(&record, 0);
        let CellViewModel::Select { data, choices, editor, .. } = &cell else {
            panic!("expected select cell, got {cell:?}");
        };
        assert_eq!(data, &vec!["Alpha".to_string(), "Untitled".to_string()]);
        assert_eq!(choices[1].id.as_deref(), Some("recB"));
        assert!(matches!(editor, Some(EditorCapability::Link { .. })));
    }

    #[test]
    fn attachments_resolve_covers() {
        let p = projector(
            vec![FieldDescriptor::new("fldFiles", "Files", FieldKind::Attachment)],
            true,
        );
        let attachment = |id: &str, mimetype: &str, url: &str| {
            CellValue::Attachment(AttachmentItem {
                id: id.into(),
                name: format!("{id}.bin"),
                mimetype: mimetype.into(),
                url: url.into(),
                size: None,
            })
        };
        let record = MemoryRecord::new("rec1").with_cell(
            "fldFiles",
            CellValue::List(vec![
                attachment("a1", "image/jpeg", "https://cdn/a1.jpg"),
                attachment("a2", "application/pdf", "https://cdn/a2.pdf"),
            ]),
        );

        let CellViewModel::Image {
            data, display_data, ..
        } = p.project(&record, 0)
        else {
            panic!("expected image cell");
        };
        assert_eq!(
            data,
            vec![
                ImageItem {
                    id: "a1".into(),
                    url: "https://cdn/a1.jpg".into(),
                },
                ImageItem {
                    id: "a2".into(),
                    url: "/images/file/pdf.svg".into(),
                },
            ]
        );
        assert_eq!(display_data, vec!["https://cdn/a1.jpg", "/images/file/pdf.svg"]);
    }

    #[test]
    fn rating_uses_options() {
        let p = projector(
            vec![FieldDescriptor::new(
                "fldScore",
                "Score",
                FieldKind::Rating {
                    options: RatingOptions::default(),
                },
            )],
            true,
        );
        let record = MemoryRecord::new("rec1").with_cell("fldScore", CellValue::Number(4.0));
        assert_eq!(
            p.project(&record, 0),
            CellViewModel::Rating {
                data: 4.0,
                readonly: false,
                icon: RatingOptions::default().icon,
                color: RatingOptions::default().color.hex().to_string(),
                max: 5,
            }
        );
    }

    #[test]
    fn out_of_range_column_is_loading() {
        let p = projector(vec![number_field("f")], true);
        assert_eq!(p.project(&MemoryRecord::new("r"), 3), CellViewModel::Loading);
        assert_eq!(p.project_field(None, &MemoryRecord::new("r")), CellViewModel::Loading);
    }

    #[test]
    fn commit_number_edit_writes_to_bound_record() {
        let record = MemoryRecord::new("rec1");
        let editor = EditorCapability::Number {
            field_id: "fldAmt".into(),
            record_id: "rec1".into(),
            value: None,
            formatting: tess_core::field::NumberFormatting::default(),
        };

        assert!(commit_number_edit(&record, &editor, Some(9.5)));
        assert_eq!(record.cell_value("fldAmt"), Some(CellValue::Number(9.5)));

        assert!(commit_number_edit(&record, &editor, None));
        assert_eq!(record.cell_value("fldAmt"), None);
        assert_eq!(record.updates().len(), 2);

        let other = MemoryRecord::new("rec2");
        assert!(!commit_number_edit(&other, &editor, Some(1.0)));
        assert!(other.updates().is_empty());

        let date_editor = EditorCapability::Date {
            field_id: "fldAmt".into(),
            record_id: "rec1".into(),
        };
        assert!(!commit_number_edit(&record, &date_editor, Some(1.0)));
    }
}

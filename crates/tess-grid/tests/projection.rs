//! End-to-end behavior of the grid projection through `GridColumns`.

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tess_config::TesseraConfig;
use tess_core::enums::{CellValueType, TextShowAsType, TimeFormatting};
use tess_core::field::{
    ComputedOptions, ComputedShowAs, DateFormatting, DateOptions, FieldDescriptor, FieldKind,
    LinkOptions, NumberOptions, RatingOptions, TextOptions, TextShowAs,
};
use tess_core::record::{MemoryRecord, Record, TablePermission};
use tess_core::snapshot::TableSnapshot;
use tess_core::value::{CellValue, LinkRef};
use tess_core::view_model::{CellKind, CellViewModel, ClickAction};
use tess_grid::format::DefaultFormatter;
use tess_grid::{CellFormatter, Collaborators, GridColumns, GridInputs, ReferenceOpener};

/// Formatter that counts whole-value conversions.
#[derive(Default)]
struct CountingFormatter {
    calls: Cell<usize>,
}

impl CellFormatter for CountingFormatter {
    fn cell_value_to_string(&self, field: &FieldDescriptor, value: Option<&CellValue>) -> String {
        self.calls.set(self.calls.get() + 1);
        DefaultFormatter.cell_value_to_string(field, value)
    }

    fn item_to_string(&self, field: &FieldDescriptor, item: &CellValue) -> String {
        DefaultFormatter.item_to_string(field, item)
    }
}

/// Opener that remembers what it was asked to open.
#[derive(Default)]
struct RecordingOpener {
    opened: std::cell::RefCell<Vec<(TextShowAsType, String)>>,
}

impl ReferenceOpener for RecordingOpener {
    fn open(&self, show_as: TextShowAsType, text: &str) {
        self.opened.borrow_mut().push((show_as, text.to_string()));
    }
}

fn date_field(id: &str, time_zone: &str) -> FieldDescriptor {
    FieldDescriptor::new(
        id,
        "Due",
        FieldKind::Date {
            options: DateOptions {
                formatting: DateFormatting {
                    date: "YYYY-MM-DD".into(),
                    time: TimeFormatting::Hour24,
                    time_zone: time_zone.into(),
                },
            },
        },
    )
}

fn single(field: FieldDescriptor) -> GridInputs {
    GridInputs::new(vec![Some(field)], TablePermission::editable())
}

#[rstest]
#[case("user")]
#[case("autoNumber")]
#[case("createdTime")]
#[case("lastModifiedTime")]
#[case("hologram")]
fn unrecognized_types_are_loading(#[case] type_tag: &str, #[values(true, false)] editable: bool) {
    let json = format!(
        r#"{{"id":"fldX","name":"X","type":"{type_tag}","cellValueType":"string"}}"#
    );
    let field: FieldDescriptor = field_from_json(&json);
    let permission = if editable {
        TablePermission::editable()
    } else {
        TablePermission::read_only()
    };

    let mut grid = GridColumns::new(&TesseraConfig::default());
    let projection = grid.compute(GridInputs::new(vec![Some(field)], permission));
    let record = MemoryRecord::new("rec1").with_cell("fldX", CellValue::Text("v".into()));
    assert_eq!(projection.cells.project(&record, 0), CellViewModel::Loading);
}

fn field_from_json(json: &str) -> FieldDescriptor {
    TableSnapshot::from_json(&format!(r#"{{"fields":[{json}]}}"#))
        .expect("valid snapshot")
        .fields
        .remove(0)
        .expect("present field")
}

#[test]
fn date_display_is_formatted_once_per_key() {
    let formatter = Rc::new(CountingFormatter::default());
    let collaborators = Collaborators::default().with_formatter(formatter.clone());
    let mut grid = GridColumns::with_collaborators(&TesseraConfig::default(), collaborators);
    let projection = grid.compute(single(date_field("fldDue", "utc")));

    let record = MemoryRecord::new("rec1")
        .with_cell("fldDue", CellValue::Text("2024-06-01T09:15:00Z".into()));

    let first = projection.cells.project(&record, 0);
    let second = projection.cells.project(&record, 0);
    assert_eq!(first, second);
    assert_eq!(formatter.calls.get(), 1);

    let CellViewModel::Text { display_data, editor, .. } = first else {
        panic!("date fields project to text cells");
    };
    assert_eq!(display_data, "2024-06-01 09:15");
    assert_eq!(editor.map(|e| e.field_id().to_string()).as_deref(), Some("fldDue"));

    // Another record with the same value shares the cache entry.
    let twin = MemoryRecord::new("rec2")
        .with_cell("fldDue", CellValue::Text("2024-06-01T09:15:00Z".into()));
    let _ = projection.cells.project(&twin, 0);
    assert_eq!(formatter.calls.get(), 1);
}

#[test]
fn date_cache_survives_recompute_but_keys_on_formatting() {
    let formatter = Rc::new(CountingFormatter::default());
    let collaborators = Collaborators::default().with_formatter(formatter.clone());
    let mut grid = GridColumns::with_collaborators(&TesseraConfig::default(), collaborators);
    let record = MemoryRecord::new("rec1")
        .with_cell("fldDue", CellValue::Text("2024-06-01T23:00:00Z".into()));

    let utc = grid.compute(single(date_field("fldDue", "utc")));
    let _ = utc.cells.project(&record, 0);

    let read_only = grid.compute(GridInputs::new(
        vec![Some(date_field("fldDue", "utc"))],
        TablePermission::read_only(),
    ));
    let _ = read_only.cells.project(&record, 0);
    assert_eq!(formatter.calls.get(), 1);

    let shifted = grid.compute(single(date_field("fldDue", "+02:00")));
    let cell = shifted.cells.project(&record, 0);
    assert_eq!(formatter.calls.get(), 2);
    assert!(matches!(
        cell,
        CellViewModel::Text { ref display_data, .. } if display_data == "2024-06-02 01:00"
    ));
}

#[test]
fn rating_with_multiple_values_is_number() {
    let field = FieldDescriptor::new(
        "fldScore",
        "Score",
        FieldKind::Rating {
            options: RatingOptions::default(),
        },
    )
    .lookup()
    .multiple();
    let mut grid = GridColumns::new(&TesseraConfig::default());
    let projection = grid.compute(single(field));
    let record = MemoryRecord::new("rec1").with_cell(
        "fldScore",
        CellValue::List(vec![CellValue::Number(3.0), CellValue::Number(5.0)]),
    );

    let cell = projection.cells.project(&record, 0);
    assert_eq!(cell.kind(), CellKind::Number);
    assert_eq!(cell.readonly(), Some(true));
}

#[test]
fn empty_link_title_reads_untitled() {
    let field = FieldDescriptor::new(
        "fldOwner",
        "Owner",
        FieldKind::Link {
            options: LinkOptions::default(),
        },
    );
    let mut grid = GridColumns::new(&TesseraConfig::default());
    let projection = grid.compute(single(field));
    let record = MemoryRecord::new("rec1").with_cell(
        "fldOwner",
        CellValue::Link(LinkRef {
            id: "recPeer".into(),
            title: Some(String::new()),
        }),
    );

    let CellViewModel::Select { data, .. } = projection.cells.project(&record, 0) else {
        panic!("link fields project to select cells");
    };
    assert_eq!(data, vec!["Untitled".to_string()]);
}

#[test]
fn columns_keep_order_and_skip_missing() {
    let mut grid = GridColumns::new(&TesseraConfig::default());
    let projection = grid.compute(GridInputs::new(
        vec![
            Some(FieldDescriptor::new("f1", "One", FieldKind::Checkbox)),
            None,
            Some(FieldDescriptor::new("f2", "Two", FieldKind::LongText)),
        ],
        TablePermission::editable(),
    ));
    let ids: Vec<_> = projection.columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["f1", "f2"]);

    let record = MemoryRecord::new("rec1").with_cell("f2", CellValue::Text("note".into()));
    assert_eq!(projection.cells.project(&record, 1).kind(), CellKind::Text);
}

#[test]
fn clicks_reach_the_opener() {
    let opener = Rc::new(RecordingOpener::default());
    let collaborators = Collaborators::default().with_opener(opener.clone());
    let mut grid = GridColumns::with_collaborators(&TesseraConfig::default(), collaborators);
    let projection = grid.compute(single(email_formula()));
    let record =
        MemoryRecord::new("rec1").with_cell("fldMail", CellValue::Text("ops@example.com".into()));

    let CellViewModel::Link { on_click, data, .. } = projection.cells.project(&record, 0) else {
        panic!("formula with text show-as projects to a link cell");
    };
    assert_eq!(
        on_click,
        ClickAction::OpenReference {
            show_as: TextShowAsType::Email,
        }
    );
    projection
        .cells
        .click(&on_click, data[0].as_text().unwrap_or_default());
    assert_eq!(
        opener.opened.borrow().as_slice(),
        [(TextShowAsType::Email, "ops@example.com".to_string())]
    );
}

fn email_formula() -> FieldDescriptor {
    FieldDescriptor::new(
        "fldMail",
        "Contact",
        FieldKind::Formula {
            options: ComputedOptions {
                show_as: Some(ComputedShowAs::Text(TextShowAs {
                    kind: TextShowAsType::Email,
                })),
                ..Default::default()
            },
        },
    )
    .with_cell_value_type(CellValueType::String)
    .computed()
}

#[rstest]
#[case::text_show_as(FieldDescriptor::new(
    "fldMail",
    "Contact",
    FieldKind::SingleLineText {
        options: TextOptions {
            show_as: Some(TextShowAs { kind: TextShowAsType::Url }),
        },
    },
))]
#[case::formula_show_as(email_formula())]
fn link_display_comes_from_the_formatter(#[case] field: FieldDescriptor) {
    let formatter = Rc::new(CountingFormatter::default());
    let collaborators = Collaborators::default().with_formatter(formatter.clone());
    let mut grid = GridColumns::with_collaborators(&TesseraConfig::default(), collaborators);
    let projection = grid.compute(single(field));
    let record = MemoryRecord::new("rec1").with_cell(
        "fldMail",
        CellValue::List(vec![CellValue::Link(LinkRef {
            id: "recX".into(),
            title: Some("Alpha".into()),
        })]),
    );

    let CellViewModel::Link { display_data, .. } = projection.cells.project(&record, 0) else {
        panic!("show-as text projects to a link cell");
    };
    assert_eq!(display_data, "Alpha");
    assert_eq!(formatter.calls.get(), 1);
}

#[test]
fn json_list_values_project_as_lists() {
    let snapshot = TableSnapshot::from_json(
        r#"{
            "fields": [{
                "id": "fldTags",
                "name": "Tags",
                "type": "multipleSelect",
                "cellValueType": "string",
                "isMultipleCellValue": true,
                "options": {"choices": [
                    {"name": "red", "color": "redDark1"},
                    {"name": "sky", "color": "cyanLight2"}
                ]}
            }],
            "records": [{"id": "rec1", "fields": {"fldTags": ["red", "sky"]}}]
        }"#,
    )
    .expect("valid snapshot");
    let records = snapshot.memory_records();
    let mut grid = GridColumns::new(&TesseraConfig::default());
    let projection = grid.compute(GridInputs::new(snapshot.fields, TablePermission::editable()));

    let CellViewModel::Select { data, .. } = projection.cells.project(&records[0], 0) else {
        panic!("multiple select projects to a select cell");
    };
    assert_eq!(data, ["red", "sky"]);
}

#[test]
fn number_edits_round_trip_through_the_record() {
    let field = FieldDescriptor::new(
        "fldQty",
        "Qty",
        FieldKind::Number {
            options: NumberOptions::default(),
        },
    );
    let mut grid = GridColumns::new(&TesseraConfig::default());
    let projection = grid.compute(single(field));
    let record = MemoryRecord::new("rec1").with_cell("fldQty", CellValue::Number(2.0));

    let cell = projection.cells.project(&record, 0);
    let editor = cell.editor().expect("number cells carry an editor").clone();
    assert!(tess_grid::commit_number_edit(&record, &editor, Some(7.0)));
    assert_eq!(record.cell_value("fldQty"), Some(CellValue::Number(7.0)));

    let refreshed = projection.cells.project(&record, 0);
    assert!(matches!(refreshed, CellViewModel::Number { data: Some(n), .. } if n == 7.0));
}

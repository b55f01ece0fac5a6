//! Built-in catalog: Angular core, CDK and Material modules plus the
//! in-house component library, and the template/class traps pointing at them.

use crate::catalog::CatalogBuilder;
use crate::traps::TrapTables;

/// Directory names never descended into while walking a project.
pub const STOP_FOLDERS: &[&str] = &[
    ".angular",
    ".git",
    ".hg",
    ".vscode",
    "node_modules",
    "e2e",
    "dist",
    "assets",
    "midev-components",
];

/// One catalog row: symbolic key, tier, import statements.
pub struct Definition {
    pub key: &'static str,
    pub tier: usize,
    pub imports: &'static [&'static str],
}

const fn def(key: &'static str, tier: usize, imports: &'static [&'static str]) -> Definition {
    Definition { key, tier, imports }
}

pub const DEFINITIONS: &[Definition] = &[
    // Angular core
    def("common", 0, &["import { CommonModule } from '@angular/common';"]),
    def("form", 0, &["import { FormsModule } from '@angular/forms';"]),
    def("reactiveform", 0, &["import { ReactiveFormsModule } from '@angular/forms';"]),
    // CDK
    def("cdkclipboard", 1, &["import { ClipboardModule } from '@angular/cdk/clipboard';"]),
    def("cdktextfield", 1, &["import { TextFieldModule } from '@angular/cdk/text-field';"]),
    // Material
    def(
        "autocomplete",
        2,
        &["import { MatAutocompleteModule } from '@angular/material/autocomplete';"],
    ),
    def("badge", 2, &["import { MatBadgeModule } from '@angular/material/badge';"]),
    def("button", 2, &["import { MatButtonModule } from '@angular/material/button';"]),
    def(
        "button-toggle",
        2,
        &["import { MatButtonToggleModule } from '@angular/material/button-toggle';"],
    ),
    def("card", 2, &["import { MatCardModule } from '@angular/material/card';"]),
    def(
        "checkbox",
        2,
        &["import { MatCheckboxModule } from '@angular/material/checkbox';"],
    ),
    def("chips", 2, &["import { MatChipsModule } from '@angular/material/chips';"]),
    def(
        "datepicker",
        2,
        &["import { MatDatepickerModule } from '@angular/material/datepicker';"],
    ),
    def(
        "dialog",
        2,
        &["import { MatDialogModule, MatDialog } from '@angular/material/dialog';"],
    ),
    def("divider", 2, &["import { MatDividerModule } from '@angular/material/divider';"]),
    def(
        "expansion-panel",
        2,
        &["import { MatExpansionModule } from '@angular/material/expansion';"],
    ),
    def(
        "form-field",
        2,
        &["import { MatFormFieldModule } from '@angular/material/form-field';"],
    ),
    def(
        "grid-list",
        2,
        &["import { MatGridListModule } from '@angular/material/grid-list';"],
    ),
    def("icon", 2, &["import { MatIconModule } from '@angular/material/icon';"]),
    def("input", 2, &["import { MatInputModule } from '@angular/material/input';"]),
    def("list", 2, &["import { MatListModule } from '@angular/material/list';"]),
    def("menu", 2, &["import { MatMenuModule } from '@angular/material/menu';"]),
    def(
        "paginator",
        2,
        &["import { MatPaginatorModule } from '@angular/material/paginator';"],
    ),
    def(
        "progressbar",
        2,
        &["import { MatProgressBarModule } from '@angular/material/progress-bar';"],
    ),
    def(
        "spinner",
        2,
        &["import { MatProgressSpinnerModule } from '@angular/material/progress-spinner';"],
    ),
    def("radiogroup", 2, &["import { MatRadioModule } from '@angular/material/radio';"]),
    def("select", 2, &["import { MatSelectModule } from '@angular/material/select';"]),
    def(
        "slidetoggle",
        2,
        &["import { MatSlideToggleModule } from '@angular/material/slide-toggle';"],
    ),
    def("slider", 2, &["import { MatSliderModule } from '@angular/material/slider';"]),
    def(
        "snackbar",
        2,
        &["import { MatSnackBarModule, MatSnackBar } from '@angular/material/snack-bar';"],
    ),
    def("sort-header", 2, &["import { MatSortModule } from '@angular/material/sort';"]),
    def("stepper", 2, &["import { MatStepperModule } from '@angular/material/stepper';"]),
    def("table", 2, &["import { MatTableModule } from '@angular/material/table';"]),
    def("tab", 2, &["import { MatTabsModule } from '@angular/material/tabs';"]),
    def("toolbar", 2, &["import { MatToolbarModule } from '@angular/material/toolbar';"]),
    def("tooltip", 2, &["import { MatTooltipModule } from '@angular/material/tooltip';"]),
    def("tree", 2, &["import { MatTreeModule } from '@angular/material/tree';"]),
    // In-house components
    def(
        "enablement-state-picker",
        3,
        &["import { EnablementState } from '../midev-components/enablement-state';"],
    ),
    def(
        "ident-token-code",
        3,
        &["import { IdentTokenCodeComponent } from '../midev-components/ident-token-code/ident-token-code.component';"],
    ),
    def(
        "json-input-t1",
        3,
        &["import { JSONInputT1Component } from '../midev-components/json-input-t1/json-input-t1.component';"],
    ),
    def(
        "operation-result-e1",
        3,
        &["import { OperationResultNoticeE1Module, OperationResultNoticeE1 } from '../midev-components/operation-result-e1';"],
    ),
    def(
        "pipe-unix-timestamp",
        3,
        &["import { UnixTimestampPipe } from '../midev-components/unix-timestamp.pipe';"],
    ),
];

/// Template token → catalog key.
pub const MARKUP_TRAPS: &[(&str, &str)] = &[
    ("ngIf", "common"),
    ("ngFor", "common"),
    ("ngSwitch", "common"),
    ("ngModel", "form"),
    ("formGroup", "reactiveform"),
    ("mat-autocomplete", "autocomplete"),
    ("matBadge", "badge"),
    ("button", "button"),
    ("matButton", "button"),
    ("mat-button-toggle", "button-toggle"),
    ("mat-card", "card"),
    ("mat-checkbox", "checkbox"),
    ("mat-basic-chip", "chips"),
    ("mat-chip", "chips"),
    ("matDatepicker", "datepicker"),
    ("mat-date-range-picker", "datepicker"),
    ("matStartDate", "datepicker"),
    ("matEndDate", "datepicker"),
    ("mat-calendar", "datepicker"),
    ("mat-datepicker", "datepicker"),
    ("matDatepickerToggleIcon", "datepicker"),
    ("mat-datepicker-toggle", "datepicker"),
    ("mat-divider", "divider"),
    ("mat-expansion-panel", "expansion-panel"),
    ("mat-form-field", "form-field"),
    ("mat-label", "form-field"),
    ("mat-error", "form-field"),
    ("matError", "form-field"),
    ("mat-grid-list", "grid-list"),
    ("mat-icon", "icon"),
    ("input", "input"),
    ("textarea", "input"),
    ("select", "input"),
    ("matInput", "input"),
    ("mat-list", "list"),
    ("mat-menu", "menu"),
    ("matMenu", "menu"),
    ("matMenuTrigger", "menu"),
    ("mat-menu-trigger-for", "menu"),
    ("matMenuTriggerFor", "menu"),
    ("mat-menu-item", "menu"),
    ("mat-paginator", "paginator"),
    ("matPaginator", "paginator"),
    ("mat-progress-bar", "progressbar"),
    ("mat-progress-spinner", "spinner"),
    ("mat-spinner", "spinner"),
    ("mat-radio-group", "radiogroup"),
    ("mat-select", "select"),
    ("mat-slide-toggle", "slidetoggle"),
    ("mat-slider", "slider"),
    ("mat-sort-header", "sort-header"),
    ("mat-step", "stepper"),
    ("mat-table", "table"),
    ("matTabContent", "tab"),
    ("mat-toolbar", "toolbar"),
    ("matTooltip", "tooltip"),
    ("mat-tree", "tree"),
    ("cdkCopyToClipboard", "cdkclipboard"),
    ("cdkAutofill", "cdktextfield"),
    ("cdkTextareaAutosize", "cdktextfield"),
    ("midev-enablement-state-picker", "enablement-state-picker"),
    ("midev-ident-token-code", "ident-token-code"),
    ("midev-json-input-t1", "json-input-t1"),
    ("unixTimestamp", "pipe-unix-timestamp"),
];

/// Class-body pattern → catalog key. Injected services need their module
/// even when the template never mentions them.
pub const LOGIC_TRAPS: &[(&str, &str)] = &[
    (
        r"(private|protected|public)\s+[a-zA-Z0-9_]+:\s+MatDialog",
        "dialog",
    ),
    (
        r"(private|protected|public)\s+[a-zA-Z0-9_]+:\s+MatSnackBar",
        "snackbar",
    ),
    (
        r"(private|protected|public)\s+[a-zA-Z0-9_]+:\s+OperationResultNoticeE1",
        "operation-result-e1",
    ),
];

/// Catalog builder seeded with [`DEFINITIONS`].
pub fn catalog() -> CatalogBuilder {
    let mut builder = CatalogBuilder::new();
    for d in DEFINITIONS {
        builder.insert(d.key, d.tier, d.imports.iter().map(|s| s.to_string()));
    }
    builder
}

/// Trap tables seeded with [`MARKUP_TRAPS`] and [`LOGIC_TRAPS`].
pub fn trap_tables() -> TrapTables {
    let mut tables = TrapTables::default();
    for (trigger, key) in MARKUP_TRAPS {
        tables.markup.insert(trigger.to_string(), key.to_string());
    }
    for (pattern, key) in LOGIC_TRAPS {
        tables.logic.insert(pattern.to_string(), key.to_string());
    }
    tables
}

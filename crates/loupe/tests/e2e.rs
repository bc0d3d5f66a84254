//! End-to-end tests driving the public API against a real libclang.
//!
//! Every test needs the shared library at runtime; when the loader cannot
//! find one, each test returns early rather than failing, so the suite is
//! still meaningful on machines without clang installed.

use loupe::{
    ChildVisit, Cursor, CursorKind, Entity, EvalResult, Index, NameRefOptions, ParseOptions,
    Severity, TokenKind, TranslationUnit, Type, TypeKind, TypeLayoutError, UnsavedFile,
};

/// An index when the shared library is available, `None` otherwise.
fn clang() -> Option<Index> {
    Index::new(false, false).ok()
}

fn parse<'idx>(index: &'idx Index, source: &str) -> TranslationUnit<'idx> {
    TranslationUnit::from_source(index, source, &["-std=c11"], ParseOptions::empty())
        .unwrap_or_else(|err| panic!("parse: {err}"))
}

fn parse_cxx<'idx>(index: &'idx Index, source: &str) -> TranslationUnit<'idx> {
    TranslationUnit::from_source(index, source, &["-x", "c++"], ParseOptions::empty())
        .unwrap_or_else(|err| panic!("parse: {err}"))
}

// =============================================================================
// Tokenization
// =============================================================================

#[test]
fn trivial_program_tokenizes_into_six_tokens() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int main() {}");

    let tokens = unit.tokens();
    let spellings: Vec<String> = tokens.iter().map(|token| token.spelling()).collect();
    assert_eq!(spellings, ["int", "main", "(", ")", "{", "}"]);

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind()).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Punctuation,
            TokenKind::Punctuation,
            TokenKind::Punctuation,
        ]
    );
}

#[test]
fn tokens_report_their_locations() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int main() {}");

    let tokens = unit.tokens();
    let first = tokens.first().unwrap_or_else(|| panic!("no tokens"));
    let location = first.location().file_location();
    assert_eq!(location.line, 1);
    assert_eq!(location.column, 1);
}

#[test]
fn annotate_pairs_each_token_with_a_cursor_slot() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int main() {}");

    let tokens = unit.tokens();
    let cursors = unit.annotate(&tokens);
    assert_eq!(cursors.len(), tokens.len());
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn broken_source_produces_an_error_diagnostic() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int x = ;");

    let diagnostics = unit.diagnostics();
    assert!(!diagnostics.is_empty());

    let worst = diagnostics
        .iter()
        .map(|diagnostic| diagnostic.severity())
        .max()
        .unwrap_or_else(|| panic!("no severities"));
    assert!(worst >= Severity::Error);

    let first = &diagnostics[0];
    assert!(!first.message().is_empty());
    assert!(first.location().file_location().line >= 1);
}

#[test]
fn clean_source_produces_no_diagnostics() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int main() { return 0; }");

    assert!(unit.diagnostics().is_empty());
}

// =============================================================================
// Traversal
// =============================================================================

const TWO_FUNCTIONS: &str = "int first(int a) { return a; }\nvoid second(void) {}\n";

#[test]
fn continue_visits_only_top_level_declarations() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, TWO_FUNCTIONS);

    let mut names = Vec::new();
    let aborted = unit.cursor().visit_children(|cursor| {
        names.push(cursor.spelling());
        ChildVisit::Continue
    });
    assert!(!aborted);
    assert_eq!(names, ["first", "second"]);
}

#[test]
fn recurse_descends_into_bodies() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, TWO_FUNCTIONS);

    let mut kinds = Vec::new();
    let _ = unit.cursor().visit_children(|cursor| {
        kinds.push(cursor.kind());
        ChildVisit::Recurse
    });
    assert!(kinds.contains(&CursorKind::ParmDecl));
    assert!(kinds.contains(&CursorKind::CompoundStmt));
    assert!(kinds.contains(&CursorKind::ReturnStmt));
}

#[test]
fn recurse_interleaves_each_subtree_after_its_root() {
    fn subtree(cursor: Cursor<'_>, out: &mut Vec<(CursorKind, String)>) {
        for child in cursor.children() {
            out.push((child.kind(), child.spelling()));
            subtree(child, out);
        }
    }

    let Some(index) = clang() else { return };
    let unit = parse(&index, TWO_FUNCTIONS);

    let top = unit.cursor().children();
    let mut expected = Vec::new();
    for child in &top {
        expected.push((child.kind(), child.spelling()));
        subtree(*child, &mut expected);
    }

    let mut walked = Vec::new();
    let _ = unit.cursor().visit_children(|cursor| {
        walked.push((cursor.kind(), cursor.spelling()));
        ChildVisit::Recurse
    });

    // Same siblings as the Continue walk, with every node's subtree spliced
    // in immediately after the node itself.
    assert_eq!(walked, expected);
    assert!(walked.len() > top.len());
}

#[test]
fn abort_stops_the_walk_after_the_first_child() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, TWO_FUNCTIONS);

    let mut visited = 0;
    let aborted = unit.cursor().visit_children(|_| {
        visited += 1;
        ChildVisit::Abort
    });
    assert!(aborted);
    assert_eq!(visited, 1);
}

#[test]
fn children_collects_in_source_order() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, TWO_FUNCTIONS);

    let children = unit.cursor().children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].spelling(), "first");
    assert_eq!(children[1].spelling(), "second");
}

// =============================================================================
// Entity dispatch
// =============================================================================

#[test]
fn function_declarations_classify_with_signature_detail() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int add(int a, int b) { return a + b; }");

    let children = unit.cursor().children();
    let Some(Entity::Function(function)) = children.first().map(|child| child.classify()) else {
        panic!("expected a function entity");
    };
    assert_eq!(function.cursor().spelling(), "add");
    assert!(!function.is_variadic());

    let result = function
        .result_type()
        .unwrap_or_else(|| panic!("no result type"));
    assert_eq!(result.kind(), TypeKind::Int);

    let parameters = function.parameters();
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0].spelling(), "a");
    assert_eq!(parameters[1].spelling(), "b");
}

#[test]
fn struct_declarations_classify_and_enumerate_fields() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "struct point { int x; int y; };");

    let children = unit.cursor().children();
    let Some(Entity::Struct(record)) = children.first().map(|child| child.classify()) else {
        panic!("expected a struct entity");
    };
    let fields = record.fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].spelling(), "x");
    assert_eq!(fields[1].spelling(), "y");
}

#[test]
fn methods_classify_with_cxx_detail() {
    let Some(index) = clang() else { return };
    let unit = parse_cxx(
        &index,
        "class widget { public: int size() const; static void reset(); };",
    );

    let mut methods = Vec::new();
    let _ = unit.cursor().visit_children(|cursor| {
        if let Entity::Method(method) = cursor.classify() {
            methods.push(method);
        }
        ChildVisit::Recurse
    });
    assert_eq!(methods.len(), 2);
    assert!(methods[0].is_const());
    assert!(!methods[0].is_static());
    assert!(methods[1].is_static());
}

// =============================================================================
// Types and layout
// =============================================================================

#[test]
fn record_layout_answers_size_alignment_and_offsets() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "struct pair { int first; int second; };");

    let children = unit.cursor().children();
    let record = children
        .first()
        .and_then(|child| child.type_of())
        .and_then(|ty| ty.as_record())
        .unwrap_or_else(|| panic!("expected a record type"));

    assert_eq!(record.as_type().size_of(), Ok(8));
    assert_eq!(record.as_type().align_of(), Ok(4));
    assert_eq!(record.offset_of("second"), Ok(32));
    assert_eq!(
        record.offset_of("missing"),
        Err(TypeLayoutError::InvalidFieldName)
    );
}

#[test]
fn incomplete_types_report_a_layout_error() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "struct forward;");

    let children = unit.cursor().children();
    let ty = children
        .first()
        .and_then(|child| child.type_of())
        .unwrap_or_else(|| panic!("expected a type"));
    assert_eq!(ty.size_of(), Err(TypeLayoutError::Incomplete));
}

#[test]
fn type_sugar_resolves_through_canonical() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "typedef int number; number n = 3;");

    let children = unit.cursor().children();
    let variable = children
        .last()
        .unwrap_or_else(|| panic!("expected declarations"));
    let ty = variable.type_of().unwrap_or_else(|| panic!("no type"));
    assert_eq!(ty.kind(), TypeKind::Typedef);
    assert_eq!(ty.canonical().kind(), TypeKind::Int);
    assert_eq!(ty.typedef_underlying().map(Type::kind), Some(TypeKind::Int));
    assert!(ty.canonical().typedef_underlying().is_none());
}

#[test]
fn cursors_classify_into_broad_categories() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int answer(void) { return 40 + 2; }");

    let children = unit.cursor().children();
    let function = children.first().unwrap_or_else(|| panic!("no declaration"));
    assert!(function.is_declaration());
    assert!(!function.is_statement());

    let mut saw_statement = false;
    let mut saw_expression = false;
    let _ = function.visit_children(|cursor| {
        saw_statement |= cursor.is_statement();
        saw_expression |= cursor.is_expression();
        ChildVisit::Recurse
    });
    assert!(saw_statement);
    assert!(saw_expression);
}

// =============================================================================
// Null propagation
// =============================================================================

#[test]
fn the_root_cursor_has_no_parent_and_no_type() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int main() {}");

    let root = unit.cursor();
    assert_eq!(root.kind(), CursorKind::TranslationUnit);
    assert!(root.semantic_parent().is_none());
    assert!(root.type_of().is_none());
    assert!(root.language().is_none());
}

#[test]
fn unknown_files_resolve_to_none() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int main() {}");

    assert!(unit.file("input.c").is_some());
    assert!(unit.file("missing.c").is_none());
}

#[test]
fn name_ranges_resolve_only_for_references() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "int value = 0;\nint use_it(void) { return value; }");

    let mut reference = None;
    let _ = unit.cursor().visit_children(|cursor| {
        if cursor.kind() == CursorKind::DeclRefExpr {
            reference = Some(cursor);
            return ChildVisit::Abort;
        }
        ChildVisit::Recurse
    });
    let reference = reference.unwrap_or_else(|| panic!("no reference cursor"));
    let range = reference
        .reference_name_range(NameRefOptions::empty(), 0)
        .unwrap_or_else(|| panic!("no name range"));
    let spellings: Vec<String> = range.tokens().iter().map(|t| t.spelling()).collect();
    assert_eq!(spellings, ["value"]);

    // The root cursor references nothing, so no piece resolves.
    assert!(
        unit.cursor()
            .reference_name_range(NameRefOptions::WANT_QUALIFIER, 0)
            .is_none()
    );
}

// =============================================================================
// Evaluation and comments
// =============================================================================

#[test]
fn constant_initializers_evaluate_at_compile_time() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "const int answer = 40 + 2;");

    let children = unit.cursor().children();
    let variable = children.first().unwrap_or_else(|| panic!("no declaration"));
    assert_eq!(variable.evaluate(), Some(EvalResult::Int(42)));
}

#[test]
fn evaluation_keeps_the_full_64_bit_range() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "const long long big = 1099511627776LL;");

    let children = unit.cursor().children();
    let variable = children.first().unwrap_or_else(|| panic!("no declaration"));
    assert_eq!(variable.evaluate(), Some(EvalResult::Int(1_099_511_627_776)));
}

#[test]
fn statements_do_not_evaluate() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "void noop(void) {}");

    let children = unit.cursor().children();
    let function = children.first().unwrap_or_else(|| panic!("no declaration"));
    assert_eq!(function.evaluate(), None);
}

#[test]
fn doc_comments_surface_brief_text() {
    let Some(index) = clang() else { return };
    let unit = parse(&index, "/** Adds two numbers. */\nint add(int a, int b);");

    let children = unit.cursor().children();
    let function = children.first().unwrap_or_else(|| panic!("no declaration"));
    assert_eq!(function.brief_comment().as_deref(), Some("Adds two numbers."));
    let full = function
        .parsed_comment()
        .unwrap_or_else(|| panic!("no parsed comment"));
    let root = full.as_comment();
    assert!(root.num_children() > 0);
    assert!(root.child(0).is_some());
    assert!(root.child(root.num_children()).is_none());

    let undocumented = parse(&index, "int bare(void);");
    let children = undocumented.cursor().children();
    let bare = children.first().unwrap_or_else(|| panic!("no declaration"));
    assert!(bare.parsed_comment().is_none());
}

// =============================================================================
// Reparse and serialization
// =============================================================================

#[test]
fn reparse_picks_up_new_unsaved_contents() {
    let Some(index) = clang() else { return };
    let mut unit = parse(&index, "int before(void);");
    assert_eq!(unit.cursor().children()[0].spelling(), "before");

    let replacement = [UnsavedFile::new("input.c", "int after(void);")];
    unit.reparse(&replacement)
        .unwrap_or_else(|err| panic!("reparse: {err}"));
    assert_eq!(unit.cursor().children()[0].spelling(), "after");
}

#[test]
fn saved_units_load_back() {
    let Some(index) = clang() else { return };
    let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let source_path = dir.path().join("main.c");
    std::fs::write(&source_path, "int main() { return 0; }")
        .unwrap_or_else(|err| panic!("write: {err}"));

    let ast_path = dir.path().join("main.ast");
    let mut unit = TranslationUnit::parse(
        &index,
        &source_path,
        &["-std=c11"],
        &[],
        ParseOptions::FOR_SERIALIZATION,
    )
    .unwrap_or_else(|err| panic!("parse: {err}"));
    unit.save(&ast_path).unwrap_or_else(|err| panic!("save: {err}"));

    let loaded = TranslationUnit::load(&index, &ast_path)
        .unwrap_or_else(|err| panic!("load: {err}"));
    assert_eq!(loaded.cursor().children()[0].spelling(), "main");
}

#[test]
fn loading_a_missing_ast_fails() {
    let Some(index) = clang() else { return };
    assert!(TranslationUnit::load(&index, "/nonexistent/unit.ast").is_err());
}

//! Single ranking dimensions observed through the standard pipeline.

use ranking::candidate::{CallableWeight, CallableWeightKind, ClassKind, ItemPriority};
use ranking::{Candidate, FqName, ImportClassification, RankingContext, rank};

use crate::helpers::candidate_builders::{Decl, int, labels, string};
use crate::helpers::fake_collaborators::{
    APP_MODULE, CURRENT_FILE, MapClassifier, PathLocality, in_app_module, in_current_file,
    in_library, in_shared_module,
};

#[test]
fn test_exact_match_wins_over_everything_else() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("size", CURRENT_FILE, &classifier, &PathLocality);

    let ranked = rank(
        vec![
            Decl::variable(1, "sizeHint", int()).at(in_current_file()).build(),
            Decl::variable(2, "size", int()).deprecated().at(in_library()).build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["size", "sizeHint"]);
}

#[test]
fn test_keyword_exact_match_beats_function_beats_variable() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("when", CURRENT_FILE, &classifier, &PathLocality);

    let ranked = rank(
        vec![
            Decl::variable(1, "when", int()).build(),
            Decl::function(2, "when", int()).build(),
            Candidate::keyword("when"),
        ],
        &ctx,
    );

    let kinds: Vec<_> = ranked
        .iter()
        .map(|c| match c.descriptor() {
            Some(d) if d.is_function() => "function",
            Some(_) => "variable",
            None => "keyword",
        })
        .collect();
    assert_eq!(kinds, vec!["keyword", "function", "variable"]);
}

#[test]
fn test_declared_priority_orders_items() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);

    let ranked = rank(
        vec![
            Decl::function(1, "staticMember", int()).build().with_priority(ItemPriority::StaticMember),
            Decl::function(2, "plain", int()).build(),
            Decl::function(3, "get", int()).build().with_priority(ItemPriority::GetOperator),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["get", "plain", "staticMember"]);
}

#[test]
fn test_deprecated_ranks_after_equivalent_symbol() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);

    let ranked = rank(
        vec![
            Decl::variable(1, "legacyName", int()).deprecated().at(in_current_file()).build(),
            Decl::variable(2, "name", int()).at(in_library()).build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["name", "legacyName"]);
}

#[test]
fn test_not_imported_classification_order() {
    let classifier = MapClassifier::new()
        .with("lib.a.Hidden", ImportClassification::NotToBeUsed)
        .with("lib.b.Far", ImportClassification::NotImported)
        .with("lib.c.Near", ImportClassification::HasImportFromSamePackage);
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);
    let class = |id, name: &str, fq: &str| {
        Decl::class(id, name, ClassKind::Class)
            .fq(fq)
            .build()
            .mark_not_imported()
    };

    let ranked = rank(
        vec![
            class(1, "Hidden", "lib.a.Hidden"),
            class(2, "Far", "lib.b.Far"),
            class(3, "Near", "lib.c.Near"),
            Decl::class(4, "Visible", ClassKind::Class).build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["Visible", "Near", "Far", "Hidden"]);
}

#[test]
fn test_imported_classification_order() {
    let classifier = MapClassifier::new()
        .with("app.Local", ImportClassification::FromCurrentPackage)
        .with("kotlin.Default", ImportClassification::DefaultImport)
        .with("lib.Precise", ImportClassification::PreciseImport)
        .with("lib.star.Star", ImportClassification::AllUnderImport);
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);
    let class = |id, fq: &str| {
        let name = FqName::from(fq).short_name().to_string();
        Decl::class(id, &name, ClassKind::Class).fq(fq).build()
    };

    let ranked = rank(
        vec![
            class(1, "lib.Unknown"),
            class(2, "lib.star.Star"),
            class(3, "lib.Precise"),
            class(4, "kotlin.Default"),
            class(5, "app.Local"),
        ],
        &ctx,
    );

    assert_eq!(
        labels(&ranked),
        vec!["Unknown", "Local", "Default", "Precise", "Star"]
    );
}

#[test]
fn test_local_without_importable_name_is_not_demoted_by_imports() {
    let classifier =
        MapClassifier::new().with("kotlin.countAll", ImportClassification::DefaultImport);
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality)
        .with_original_module(APP_MODULE);

    let ranked = rank(
        vec![
            Decl::variable(1, "countLocal", int()).at(in_current_file()).build(),
            Decl::variable(2, "countAll", int())
                .fq("kotlin.countAll")
                .at(in_library())
                .build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["countLocal", "countAll"]);
}

#[test]
fn test_unclassified_name_ties_with_missing_name() {
    let classifier =
        MapClassifier::new().with("lib.Precise", ImportClassification::PreciseImport);
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);

    let ranked = rank(
        vec![
            Decl::variable(1, "precise", int()).fq("lib.Precise").build(),
            Decl::variable(2, "unknown", int()).fq("lib.Unknown").build(),
            Decl::variable(3, "local", int()).build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["unknown", "local", "precise"]);
}

#[test]
fn test_location_order() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality)
        .with_original_module(APP_MODULE);

    let ranked = rank(
        vec![
            Decl::variable(1, "nowhere", int()).build(),
            Decl::variable(2, "library", int()).at(in_library()).build(),
            Decl::variable(3, "project", int()).at(in_shared_module()).build(),
            Decl::variable(4, "module", int()).at(in_app_module()).build(),
            Decl::variable(5, "file", int()).at(in_current_file()).build(),
        ],
        &ctx,
    );

    assert_eq!(
        labels(&ranked),
        vec!["nowhere", "file", "module", "project", "library"]
    );
}

#[test]
fn test_unlocated_declaration_is_not_ranked_below_libraries() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality)
        .with_original_module(APP_MODULE);

    let ranked = rank(
        vec![
            Decl::variable(1, "fromJar", int()).at(in_library()).build(),
            Decl::variable(2, "synthetic", int()).build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["synthetic", "fromJar"]);
}

#[test]
fn test_same_module_without_original_module_is_project() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);

    let ranked = rank(
        vec![
            Decl::variable(1, "library", int()).at(in_library()).build(),
            Decl::variable(2, "shared", int()).at(in_shared_module()).build(),
            Decl::variable(3, "module", int()).at(in_app_module()).build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["shared", "module", "library"]);
}

#[test]
fn test_kind_order() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);

    let ranked = rank(
        vec![
            Candidate::package(FqName::from("kotlin.io")),
            Decl::class(1, "Widget", ClassKind::Class).build(),
            Candidate::keyword("val"),
            Decl::variable(2, "count", int()).build(),
            Decl::class(3, "RED", ClassKind::EnumEntry).build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["RED", "count", "val", "Widget", "io"]);
}

#[test]
fn test_callable_weight_order() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);
    let weighted = |id, name: &str, kind| {
        Decl::function(id, name, string())
            .build()
            .with_callable_weight(CallableWeight::new(kind))
    };

    let ranked = rank(
        vec![
            Decl::function(1, "unweighted", string()).build(),
            weighted(2, "global", CallableWeightKind::GlobalOrStatic),
            weighted(3, "inherited", CallableWeightKind::BaseClassMember),
            weighted(4, "member", CallableWeightKind::ThisClassMember),
            weighted(5, "local", CallableWeightKind::Local),
        ],
        &ctx,
    );

    assert_eq!(
        labels(&ranked),
        vec!["unweighted", "local", "member", "inherited", "global"]
    );
}

#[test]
fn test_inner_receiver_beats_outer_receiver() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);
    let member = |id, name: &str, receiver| {
        Decl::function(id, name, string()).build().with_callable_weight(
            CallableWeight::with_receiver(CallableWeightKind::ThisClassMember, receiver),
        )
    };

    let ranked = rank(vec![member(1, "outer", 1), member(2, "inner", 0)], &ctx);

    assert_eq!(labels(&ranked), vec!["inner", "outer"]);
}

#[test]
fn test_variable_before_function() {
    let classifier = MapClassifier::new();
    let ctx = RankingContext::new("", CURRENT_FILE, &classifier, &PathLocality);

    let ranked = rank(
        vec![
            Decl::function(1, "compute", int()).build(),
            Decl::variable(2, "cached", int()).build(),
        ],
        &ctx,
    );

    assert_eq!(labels(&ranked), vec!["cached", "compute"]);
}

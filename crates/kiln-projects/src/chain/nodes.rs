//! The standard question nodes, in the order they run.

use super::question::{Answer, CancelReason, ChainContext, Choice, Question, QuestionNode};
use crate::naming::{format_target_dir, is_valid_package_name, to_valid_package_name};
use crate::types::{OverwriteChoice, Update};

/// Nodes making up the default chain, in order
pub fn standard_nodes() -> Vec<Box<dyn QuestionNode>> {
    vec![
        Box::new(ProjectNameNode),
        Box::new(TargetDirNode),
        Box::new(OverwriteNode),
        Box::new(OverwriteGuardNode),
        Box::new(PackageNameNode),
        Box::new(FrameworkNode),
        Box::new(VariantNode),
        Box::new(SampleNode),
    ]
}

fn target_dir_or_default(raw: &str, default: &str) -> String {
    let formatted = format_target_dir(raw);
    if formatted.is_empty() {
        default.to_string()
    } else {
        formatted
    }
}

fn text(answer: Answer) -> String {
    match answer {
        Answer::Text(value) => value,
        Answer::Select(index) => index.to_string(),
    }
}

fn index(answer: &Answer) -> usize {
    match answer {
        Answer::Select(index) => *index,
        Answer::Text(_) => usize::MAX,
    }
}

/// Asks for the project name unless a target directory was given
pub struct ProjectNameNode;

impl QuestionNode for ProjectNameNode {
    fn name(&self) -> &'static str {
        "projectName"
    }

    fn is_applicable(&self, ctx: &ChainContext<'_>) -> bool {
        ctx.args.formatted_target_dir().is_none()
    }

    fn render(&self, ctx: &ChainContext<'_>) -> Question {
        Question::Text {
            message: "Project name:".to_string(),
            initial: Some(ctx.default_project_name.to_string()),
        }
    }

    fn commit(&self, ctx: &ChainContext<'_>, answer: Answer) -> Vec<Update> {
        let name = text(answer);
        let target_dir = target_dir_or_default(&name, ctx.default_project_name);
        vec![Update::ProjectName(name), Update::TargetDir(target_dir)]
    }
}

/// Silent node fixing the target directory: argument, then project name,
/// then the configured default
pub struct TargetDirNode;

impl QuestionNode for TargetDirNode {
    fn name(&self) -> &'static str {
        "targetDir"
    }

    fn is_applicable(&self, _ctx: &ChainContext<'_>) -> bool {
        false
    }

    // never shown
    fn render(&self, ctx: &ChainContext<'_>) -> Question {
        Question::Text {
            message: "Target directory:".to_string(),
            initial: Some(ctx.answers.target_dir.clone()),
        }
    }

    fn commit(&self, _ctx: &ChainContext<'_>, _answer: Answer) -> Vec<Update> {
        Vec::new()
    }

    fn derive(&self, ctx: &ChainContext<'_>) -> Vec<Update> {
        let dir = match ctx.args.formatted_target_dir() {
            Some(arg) => arg,
            None if !ctx.answers.target_dir.is_empty() => ctx.answers.target_dir.clone(),
            None => ctx.default_project_name.to_string(),
        };
        vec![Update::TargetDir(dir)]
    }
}

/// Asks what to do with a non-empty target directory
pub struct OverwriteNode;

impl QuestionNode for OverwriteNode {
    fn name(&self) -> &'static str {
        "overwrite"
    }

    fn is_applicable(&self, ctx: &ChainContext<'_>) -> bool {
        // the overwrite flag pre-seeds the answer regardless of directory state
        ctx.answers.overwrite.is_none() && ctx.probe.is_occupied(&ctx.target_path())
    }

    fn render(&self, ctx: &ChainContext<'_>) -> Question {
        let subject = if ctx.answers.target_dir == "." {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{}\"", ctx.answers.target_dir)
        };
        Question::Select {
            message: format!("{} is not empty. Please choose how to proceed:", subject),
            choices: OverwriteChoice::all()
                .iter()
                .map(|choice| Choice {
                    title: choice.title().to_string(),
                    value: choice.as_str().to_string(),
                })
                .collect(),
            initial: 0,
        }
    }

    fn commit(&self, _ctx: &ChainContext<'_>, answer: Answer) -> Vec<Update> {
        OverwriteChoice::all()
            .get(index(&answer))
            .map(|choice| vec![Update::Overwrite(*choice)])
            .unwrap_or_default()
    }
}

/// Cancels the run once the user declined to touch the target directory
pub struct OverwriteGuardNode;

impl QuestionNode for OverwriteGuardNode {
    fn name(&self) -> &'static str {
        "overwriteChecker"
    }

    fn guard(&self, ctx: &ChainContext<'_>) -> Result<(), CancelReason> {
        if ctx.answers.overwrite == Some(OverwriteChoice::No) {
            return Err(CancelReason::OverwriteDeclined);
        }
        Ok(())
    }

    fn is_applicable(&self, _ctx: &ChainContext<'_>) -> bool {
        false
    }

    // never shown
    fn render(&self, _ctx: &ChainContext<'_>) -> Question {
        Question::Text {
            message: "Operation cancelled".to_string(),
            initial: None,
        }
    }

    fn commit(&self, _ctx: &ChainContext<'_>, _answer: Answer) -> Vec<Update> {
        Vec::new()
    }
}

/// Asks for a package name when the directory name is not already valid
pub struct PackageNameNode;

impl QuestionNode for PackageNameNode {
    fn name(&self) -> &'static str {
        "packageName"
    }

    fn is_applicable(&self, ctx: &ChainContext<'_>) -> bool {
        !is_valid_package_name(&ctx.project_name())
    }

    fn render(&self, ctx: &ChainContext<'_>) -> Question {
        Question::Text {
            message: "Package name:".to_string(),
            initial: Some(to_valid_package_name(
                &ctx.project_name(),
                ctx.default_project_name,
            )),
        }
    }

    fn validate(&self, _ctx: &ChainContext<'_>, answer: &Answer) -> Result<(), String> {
        match answer {
            Answer::Text(name) if is_valid_package_name(name) => Ok(()),
            _ => Err("Invalid package.json name".to_string()),
        }
    }

    fn commit(&self, _ctx: &ChainContext<'_>, answer: Answer) -> Vec<Update> {
        vec![Update::PackageName(text(answer))]
    }

    fn derive(&self, ctx: &ChainContext<'_>) -> Vec<Update> {
        vec![Update::PackageName(ctx.project_name())]
    }
}

/// Asks for a framework unless the template argument resolved
pub struct FrameworkNode;

impl QuestionNode for FrameworkNode {
    fn name(&self) -> &'static str {
        "framework"
    }

    fn is_applicable(&self, ctx: &ChainContext<'_>) -> bool {
        ctx.template.is_none()
    }

    fn render(&self, ctx: &ChainContext<'_>) -> Question {
        let message = match &ctx.args.template {
            Some(raw) => format!(
                "\"{}\" isn't a valid template. Please choose from below: ",
                raw
            ),
            None => "Select a framework:".to_string(),
        };
        Question::Select {
            message,
            choices: ctx
                .registry
                .frameworks()
                .iter()
                .map(|framework| Choice {
                    title: ctx.presenter.paint(framework.label(), &framework.color),
                    value: framework.name.clone(),
                })
                .collect(),
            initial: 0,
        }
    }

    fn commit(&self, ctx: &ChainContext<'_>, answer: Answer) -> Vec<Update> {
        ctx.registry
            .frameworks()
            .get(index(&answer))
            .map(|framework| vec![Update::Framework(framework.clone())])
            .unwrap_or_default()
    }

    fn derive(&self, ctx: &ChainContext<'_>) -> Vec<Update> {
        let Some(entry) = ctx.template else {
            return Vec::new();
        };
        let mut updates = vec![Update::Framework(entry.framework.clone())];
        if let Some(variant) = entry.variant {
            updates.push(Update::Variant(variant.clone()));
        }
        updates
    }
}

/// Asks for a variant of the selected framework
pub struct VariantNode;

impl QuestionNode for VariantNode {
    fn name(&self) -> &'static str {
        "variant"
    }

    fn is_applicable(&self, ctx: &ChainContext<'_>) -> bool {
        ctx.answers.variant.is_none()
            && ctx
                .answers
                .framework
                .as_ref()
                .is_some_and(|framework| !framework.is_terminal())
    }

    fn render(&self, ctx: &ChainContext<'_>) -> Question {
        let variants = ctx
            .answers
            .framework
            .as_ref()
            .map(|framework| framework.variants.as_slice())
            .unwrap_or_default();
        Question::Select {
            message: "Select a variant:".to_string(),
            choices: variants
                .iter()
                .map(|variant| Choice {
                    title: ctx.presenter.paint(variant.label(), &variant.color),
                    value: variant.name.clone(),
                })
                .collect(),
            initial: 0,
        }
    }

    fn commit(&self, ctx: &ChainContext<'_>, answer: Answer) -> Vec<Update> {
        ctx.answers
            .framework
            .as_ref()
            .and_then(|framework| framework.variants.get(index(&answer)))
            .map(|variant| vec![Update::Variant(variant.clone())])
            .unwrap_or_default()
    }
}

/// Asks for a sample unless the sample argument names one of the variant's samples
pub struct SampleNode;

impl SampleNode {
    fn requested<'a>(ctx: &'a ChainContext<'_>) -> Option<&'a crate::types::Sample> {
        let variant = ctx.answers.variant.as_ref()?;
        let requested = ctx.args.sample.as_deref()?;
        variant.find_sample(requested)
    }
}

impl QuestionNode for SampleNode {
    fn name(&self) -> &'static str {
        "sample"
    }

    fn is_applicable(&self, ctx: &ChainContext<'_>) -> bool {
        let has_samples = ctx
            .answers
            .variant
            .as_ref()
            .is_some_and(|variant| !variant.samples.is_empty());
        has_samples && ctx.answers.sample.is_none() && Self::requested(ctx).is_none()
    }

    fn render(&self, ctx: &ChainContext<'_>) -> Question {
        let message = match &ctx.args.sample {
            Some(raw) => format!("\"{}\" isn't a valid sample. Please choose from below: ", raw),
            None => "Select a sample:".to_string(),
        };
        let samples = ctx
            .answers
            .variant
            .as_ref()
            .map(|variant| variant.samples.as_slice())
            .unwrap_or_default();
        Question::Select {
            message,
            choices: samples
                .iter()
                .map(|sample| Choice {
                    title: ctx.presenter.paint(sample.label(), &sample.color),
                    value: sample.name.clone(),
                })
                .collect(),
            initial: 0,
        }
    }

    fn commit(&self, ctx: &ChainContext<'_>, answer: Answer) -> Vec<Update> {
        ctx.answers
            .variant
            .as_ref()
            .and_then(|variant| variant.samples.get(index(&answer)))
            .map(|sample| vec![Update::Sample(sample.clone())])
            .unwrap_or_default()
    }

    fn derive(&self, ctx: &ChainContext<'_>) -> Vec<Update> {
        Self::requested(ctx)
            .map(|sample| vec![Update::Sample(sample.clone())])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::present::Presenter;
    use crate::target::TargetProbe;
    use crate::templates::TemplateRegistry;
    use crate::types::{AnswerSet, ExternalArgs};
    use camino::Utf8Path;

    const REGISTRY: &str = r#"
version: "1.0"
frameworks:
  - name: vanilla
    color: yellow
  - name: vue
    display: Vue
    color: green
    variants:
      - name: vue
        color: green
        samples:
          - name: counter
            display: Counter
            color: green
          - name: todo-list
            color: green
      - name: vue-devtools
        color: magenta
"#;

    struct StaticProbe(bool);

    impl TargetProbe for StaticProbe {
        fn is_occupied(&self, _path: &Utf8Path) -> bool {
            self.0
        }
    }

    struct TaggingPresenter;

    impl Presenter for TaggingPresenter {
        fn paint(&self, text: &str, color: &str) -> String {
            format!("<{}>{}", color, text)
        }
    }

    struct Fixture {
        registry: TemplateRegistry,
        answers: AnswerSet,
        args: ExternalArgs,
        occupied: bool,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                registry: TemplateRegistry::from_yaml(REGISTRY).unwrap(),
                answers: AnswerSet::default(),
                args: ExternalArgs::default(),
                occupied: false,
            }
        }

        fn with_ctx<R>(&self, f: impl FnOnce(&ChainContext<'_>) -> R) -> R {
            let probe = StaticProbe(self.occupied);
            let ctx = ChainContext {
                answers: &self.answers,
                args: &self.args,
                registry: &self.registry,
                template: self.registry.resolve_entry(self.args.template.as_deref()),
                probe: &probe,
                presenter: &TaggingPresenter,
                cwd: Utf8Path::new("/work/space"),
                default_project_name: "kiln-project",
            };
            f(&ctx)
        }
    }

    #[test]
    fn test_standard_node_order() {
        let names: Vec<_> = standard_nodes().iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec![
                "projectName",
                "targetDir",
                "overwrite",
                "overwriteChecker",
                "packageName",
                "framework",
                "variant",
                "sample"
            ]
        );
    }

    #[test]
    fn test_project_name_skipped_with_target_dir_arg() {
        let mut fx = Fixture::new();
        assert!(fx.with_ctx(|ctx| ProjectNameNode.is_applicable(ctx)));

        fx.args.target_dir = Some("my-app".into());
        assert!(!fx.with_ctx(|ctx| ProjectNameNode.is_applicable(ctx)));
    }

    #[test]
    fn test_blank_target_dir_arg_counts_as_missing() {
        let mut fx = Fixture::new();
        for blank in ["", "   ", "/", " // "] {
            fx.args.target_dir = Some(blank.into());
            assert!(
                fx.with_ctx(|ctx| ProjectNameNode.is_applicable(ctx)),
                "arg {blank:?}"
            );
        }

        fx.answers.target_dir = "from-prompt".into();
        assert_eq!(
            fx.with_ctx(|ctx| TargetDirNode.derive(ctx)),
            vec![Update::TargetDir("from-prompt".into())]
        );
    }

    #[test]
    fn test_project_name_commit_derives_target_dir() {
        let fx = Fixture::new();
        let updates =
            fx.with_ctx(|ctx| ProjectNameNode.commit(ctx, Answer::Text(" web-app/ ".into())));
        assert_eq!(
            updates,
            vec![
                Update::ProjectName(" web-app/ ".into()),
                Update::TargetDir("web-app".into())
            ]
        );

        let updates = fx.with_ctx(|ctx| ProjectNameNode.commit(ctx, Answer::Text("  ".into())));
        assert_eq!(updates[1], Update::TargetDir("kiln-project".into()));
    }

    #[test]
    fn test_target_dir_precedence() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.with_ctx(|ctx| TargetDirNode.derive(ctx)),
            vec![Update::TargetDir("kiln-project".into())]
        );

        fx.answers.target_dir = "from-prompt".into();
        assert_eq!(
            fx.with_ctx(|ctx| TargetDirNode.derive(ctx)),
            vec![Update::TargetDir("from-prompt".into())]
        );

        fx.args.target_dir = Some("from-arg//".into());
        assert_eq!(
            fx.with_ctx(|ctx| TargetDirNode.derive(ctx)),
            vec![Update::TargetDir("from-arg".into())]
        );
    }

    #[test]
    fn test_overwrite_applicability() {
        let mut fx = Fixture::new();
        fx.answers.target_dir = "app".into();
        assert!(!fx.with_ctx(|ctx| OverwriteNode.is_applicable(ctx)));

        fx.occupied = true;
        assert!(fx.with_ctx(|ctx| OverwriteNode.is_applicable(ctx)));

        fx.answers.overwrite = Some(OverwriteChoice::Yes);
        assert!(!fx.with_ctx(|ctx| OverwriteNode.is_applicable(ctx)));
    }

    #[test]
    fn test_overwrite_message_names_directory() {
        let mut fx = Fixture::new();
        fx.answers.target_dir = "app".into();
        let question = fx.with_ctx(|ctx| OverwriteNode.render(ctx));
        assert_eq!(
            question.message(),
            "Target directory \"app\" is not empty. Please choose how to proceed:"
        );

        fx.answers.target_dir = ".".into();
        let question = fx.with_ctx(|ctx| OverwriteNode.render(ctx));
        assert!(question.message().starts_with("Current directory is not empty"));

        match question {
            Question::Select { choices, .. } => {
                let values: Vec<_> = choices.iter().map(|c| c.value.as_str()).collect();
                assert_eq!(values, vec!["yes", "no", "ignore"]);
            }
            other => panic!("Expected select, got {:?}", other),
        }
    }

    #[test]
    fn test_guard_cancels_only_on_no() {
        let mut fx = Fixture::new();
        assert!(fx.with_ctx(|ctx| OverwriteGuardNode.guard(ctx)).is_ok());

        fx.answers.overwrite = Some(OverwriteChoice::Ignore);
        assert!(fx.with_ctx(|ctx| OverwriteGuardNode.guard(ctx)).is_ok());

        fx.answers.overwrite = Some(OverwriteChoice::No);
        assert_eq!(
            fx.with_ctx(|ctx| OverwriteGuardNode.guard(ctx)),
            Err(CancelReason::OverwriteDeclined)
        );
    }

    #[test]
    fn test_package_name_skipped_for_valid_dir_name() {
        let mut fx = Fixture::new();
        fx.answers.target_dir = "my-app".into();
        assert!(!fx.with_ctx(|ctx| PackageNameNode.is_applicable(ctx)));
        assert_eq!(
            fx.with_ctx(|ctx| PackageNameNode.derive(ctx)),
            vec![Update::PackageName("my-app".into())]
        );
    }

    #[test]
    fn test_package_name_uses_cwd_for_dot() {
        let mut fx = Fixture::new();
        fx.answers.target_dir = ".".into();
        assert_eq!(
            fx.with_ctx(|ctx| PackageNameNode.derive(ctx)),
            vec![Update::PackageName("space".into())]
        );
    }

    #[test]
    fn test_package_name_suggests_sanitized_default() {
        let mut fx = Fixture::new();
        fx.answers.target_dir = "My Cool App".into();
        assert!(fx.with_ctx(|ctx| PackageNameNode.is_applicable(ctx)));
        assert_eq!(
            fx.with_ctx(|ctx| PackageNameNode.render(ctx)),
            Question::Text {
                message: "Package name:".into(),
                initial: Some("my-cool-app".into()),
            }
        );
    }

    #[test]
    fn test_package_name_validation() {
        let fx = Fixture::new();
        fx.with_ctx(|ctx| {
            assert!(PackageNameNode
                .validate(ctx, &Answer::Text("my-app".into()))
                .is_ok());
            assert_eq!(
                PackageNameNode.validate(ctx, &Answer::Text("MyApp".into())),
                Err("Invalid package.json name".to_string())
            );
            assert!(PackageNameNode
                .validate(ctx, &Answer::Text("1app".into()))
                .is_err());
        });
    }

    #[test]
    fn test_framework_message_for_invalid_template() {
        let mut fx = Fixture::new();
        let question = fx.with_ctx(|ctx| FrameworkNode.render(ctx));
        assert_eq!(question.message(), "Select a framework:");

        fx.args.template = Some("vue-typescript".into());
        assert!(fx.with_ctx(|ctx| FrameworkNode.is_applicable(ctx)));
        let question = fx.with_ctx(|ctx| FrameworkNode.render(ctx));
        assert_eq!(
            question.message(),
            "\"vue-typescript\" isn't a valid template. Please choose from below: "
        );
        match question {
            Question::Select { choices, .. } => {
                assert_eq!(choices[0].title, "<yellow>vanilla");
                assert_eq!(choices[1].title, "<green>Vue");
                assert_eq!(choices[1].value, "vue");
            }
            other => panic!("Expected select, got {:?}", other),
        }
    }

    #[test]
    fn test_framework_derived_from_resolved_template() {
        let mut fx = Fixture::new();
        fx.args.template = Some("devtools,vue".into());
        assert!(!fx.with_ctx(|ctx| FrameworkNode.is_applicable(ctx)));

        let updates = fx.with_ctx(|ctx| FrameworkNode.derive(ctx));
        assert_eq!(updates.len(), 2);
        assert!(matches!(&updates[0], Update::Framework(f) if f.name == "vue"));
        assert!(matches!(&updates[1], Update::Variant(v) if v.name == "vue-devtools"));
    }

    #[test]
    fn test_variant_skipped_for_terminal_framework() {
        let mut fx = Fixture::new();
        fx.answers.framework = Some(fx.registry.frameworks()[0].clone());
        assert!(!fx.with_ctx(|ctx| VariantNode.is_applicable(ctx)));

        fx.answers.framework = Some(fx.registry.frameworks()[1].clone());
        assert!(fx.with_ctx(|ctx| VariantNode.is_applicable(ctx)));

        let updates = fx.with_ctx(|ctx| VariantNode.commit(ctx, Answer::Select(1)));
        assert!(matches!(&updates[0], Update::Variant(v) if v.name == "vue-devtools"));
    }

    #[test]
    fn test_sample_argument_is_case_sensitive() {
        let mut fx = Fixture::new();
        fx.answers.variant = Some(fx.registry.frameworks()[1].variants[0].clone());

        fx.args.sample = Some("counter".into());
        assert!(!fx.with_ctx(|ctx| SampleNode.is_applicable(ctx)));
        assert!(matches!(
            &fx.with_ctx(|ctx| SampleNode.derive(ctx))[0],
            Update::Sample(s) if s.name == "counter"
        ));

        fx.args.sample = Some("Counter".into());
        assert!(fx.with_ctx(|ctx| SampleNode.is_applicable(ctx)));
        assert_eq!(
            fx.with_ctx(|ctx| SampleNode.render(ctx)).message(),
            "\"Counter\" isn't a valid sample. Please choose from below: "
        );
    }

    #[test]
    fn test_sample_skipped_without_samples() {
        let mut fx = Fixture::new();
        assert!(!fx.with_ctx(|ctx| SampleNode.is_applicable(ctx)));

        fx.answers.variant = Some(fx.registry.frameworks()[1].variants[1].clone());
        assert!(!fx.with_ctx(|ctx| SampleNode.is_applicable(ctx)));
        assert!(fx.with_ctx(|ctx| SampleNode.derive(ctx)).is_empty());
    }
}

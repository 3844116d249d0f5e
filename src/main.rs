use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use formula_editor::cli::{CliArgs, CliCommand};
use formula_editor::config::{CheckerConfig, EditorConfig};
use formula_editor::editable::EditableState;
use formula_editor::grammar::{load_chord_table, rule_for, ChordTable, NotationMode};
use formula_editor::messages::Msg;
use formula_editor::model::{AppModel, ExpressionEditor};
use formula_editor::runtime::Runtime;
use formula_editor::template::{infer_result_kind, instantiate};
use formula_editor::verification::{
    ExpressionContext, FormalChecker, ProcessChecker, UnavailableChecker,
};

fn build_checker(config: &EditorConfig) -> Arc<dyn FormalChecker> {
    match &config.checker {
        Some(checker) => Arc::new(ProcessChecker::from_config(checker)),
        None => Arc::new(UnavailableChecker),
    }
}

/// Run one verification to completion and print the outcome
fn verify(
    context: ExpressionContext,
    config: EditorConfig,
    chords: ChordTable,
    timeout: std::time::Duration,
) -> Result<()> {
    let checker = build_checker(&config);
    let mut runtime = Runtime::new(AppModel::new(context, config, chords), checker);

    runtime.dispatch(Msg::verify());
    if !runtime.wait_idle(timeout) {
        bail!("checker did not answer within {:?}", timeout);
    }

    if let Some(notice) = runtime.model.notices.first() {
        bail!("{}", notice.text);
    }
    print_editor(&runtime.model.editor);
    Ok(())
}

fn print_editor(editor: &ExpressionEditor) {
    println!("{}", editor.context().qualified());
    println!("status: {}", editor.status());
    if let Some(result) = editor.last_result() {
        if !result.typification.is_empty() {
            println!("typification: {}", result.typification);
        }
    }
    for error in editor.errors() {
        let severity = if error.is_critical { "error" } else { "warning" };
        println!("{severity} {:#x} at {}", error.code, error.position);
    }
}

fn main() -> Result<()> {
    formula_editor::tracing::init();

    let args = CliArgs::parse();
    let timeout = args.timeout();

    let mut config = EditorConfig::load();
    if let Some(command) = args.checker {
        config.checker = Some(CheckerConfig {
            command,
            args: Vec::new(),
        });
    }

    match args.command {
        CliCommand::Verify {
            alias,
            kind,
            expression,
        } => verify(
            ExpressionContext::new(alias, kind, expression),
            config,
            load_chord_table(),
            timeout,
        )
        .context("verification failed")?,

        CliCommand::Instantiate {
            template,
            kind,
            args,
            verify_as,
        } => {
            let expression = instantiate(&template, &args);
            let result_kind = infer_result_kind(kind, &args);
            match verify_as {
                Some(alias) => verify(
                    ExpressionContext::new(alias, result_kind, expression),
                    config,
                    load_chord_table(),
                    timeout,
                )
                .context("verification of instantiated template failed")?,
                None => {
                    println!("{expression}");
                    println!("kind: {result_kind}");
                }
            }
        }

        CliCommand::Insert { text, tokens } => {
            let mut field = EditableState::from_text(&text);
            for token in tokens {
                rule_for(token).apply(&mut field);
            }
            let selection = field.selection();
            println!("{}", field.text());
            println!("selection: {}..{}", selection.start, selection.end);
        }

        CliCommand::Chords { mode } => {
            let chords = load_chord_table();
            let modes = match mode {
                Some(mode) => vec![mode],
                None => vec![NotationMode::Symbolic, NotationMode::Text],
            };
            for mode in modes {
                println!("[{mode}]");
                for binding in chords.bindings_for_mode(mode) {
                    println!("  {:<24} {}", binding.keystroke.display_string(), binding.action);
                }
            }
        }
    }

    Ok(())
}

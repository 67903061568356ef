use pretty_assertions::assert_eq;
use swipekey_cli::lexer::Token;
use swipekey_cli::{run_script, ScriptError, ScriptRunner};

fn typed(script: &str) -> String {
    run_script(script, false).unwrap().text
}

#[test]
fn test_words_separated_by_space() {
    assert_eq!(typed("gksrmf dkssud"), "한글 안녕");
    assert_eq!(typed("gksrmf<SP>dkssud"), "한글 안녕");
}

#[test]
fn test_newline_ends_word() {
    assert_eq!(typed("gks<CR>rmf"), "한\n글");
    assert_eq!(typed("gks\nrmf"), "한\n글");
}

#[test]
fn test_punctuation_commits_word() {
    assert_eq!(typed("dkssudgktpdy!"), "안녕하세요!");
    assert_eq!(typed("rk,sk"), "가,나");
}

#[test]
fn test_space_starts_a_new_word() {
    // the final does not move across a committed word
    assert_eq!(typed("rkf k"), "갈 ㅏ");
}

#[test]
fn test_unrecognized_letter_typed_verbatim() {
    assert_eq!(typed("rkA"), "가A");
}

#[test]
fn test_dropped_key_changes_nothing() {
    assert_eq!(typed("dkW"), "아");
}

#[test]
fn test_backspace_falls_through_to_document() {
    assert_eq!(typed("gks <BS><BS>"), "");
    assert_eq!(typed("gks <BS><BS>rk"), "가");
    assert_eq!(typed("rk<BS><BS><BS>"), "");
}

#[test]
fn test_flush_and_reset() {
    assert_eq!(typed("rkf<FLUSH>k"), "갈ㅏ");
    assert_eq!(typed("rk<RESET>sk"), "나");
}

#[test]
fn test_trace_follows_each_token() {
    let output = run_script("rkf<BS>", true).unwrap();
    assert_eq!(output.trace.len(), 4);
    assert_eq!(output.trace[2].text, "갈");
    assert_eq!(output.trace[3].token, Token::Backspace);
    assert_eq!(output.trace[3].state.composing, "가");
    assert_eq!(output.trace[3].text, "가");
    assert_eq!(output.text, "가");

    assert!(run_script("rkf", false).unwrap().trace.is_empty());
}

#[test]
fn test_unknown_command() {
    assert_eq!(
        run_script("rk<TAB>", false),
        Err(ScriptError::UnknownCommand("TAB".to_string()))
    );
}

#[test]
fn test_runner_text_includes_open_word() {
    let mut runner = ScriptRunner::new();
    for token in [Token::Key('g'), Token::Key('k'), Token::Space, Token::Key('r')] {
        runner.apply(&token);
    }
    assert_eq!(runner.text(), "하 ㄱ");
    assert_eq!(runner.session().composing_text(), "ㄱ");
    assert_eq!(runner.finish().text, "하 ㄱ");
}

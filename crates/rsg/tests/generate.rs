//! End-to-end tests for the generator binary and library driver.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rsg::{Artifact, EmitConfig, Error, GenerateOptions, generate, parse_spec};
use tempfile::TempDir;

fn fixture_spec() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/rs.spec")
}

fn selector_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("command");
    std::fs::write(&path, contents).expect("write selector");
    path
}

fn run_rsg(args: &[&Path], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rsg"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn rsg");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait rsg")
}

fn generate_fixture(artifact: Artifact) -> String {
    let dir = TempDir::new().unwrap();
    let selector = selector_file(&dir, &artifact.selector().to_string());
    let output = dir.path().join(artifact.file_name());
    let options = GenerateOptions::new().with_spec_file(fixture_spec());
    assert_eq!(generate(&selector, &output, &options).unwrap(), artifact);
    std::fs::read_to_string(&output).unwrap()
}

#[test]
fn test_fixture_parses() {
    let text = std::fs::read_to_string(fixture_spec()).unwrap();
    let table = parse_spec(&text).unwrap();
    assert_eq!(table.len(), 10);
    assert_eq!(table.dispatch_len(), 11);
    let (_, get_message) = table.get("ContextGetMessage").unwrap();
    let names: Vec<_> = get_message.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["data", "data_length"]);
}

#[test]
fn test_structs_header() {
    let out = generate_fixture(Artifact::StructsHeader);
    assert!(out.contains("#define RS_CMD_ID_ContextDestroy 1\n"));
    assert!(out.contains("#define RS_CMD_ID_SamplerCreate 10\n"));
    assert!(!out.contains("RS_CMD_ContextDestroy_rec"));
    assert!(out.contains("typedef struct RS_CMD_ScriptInvokeV_rec RS_CMD_ScriptInvokeV;\n"));
    assert!(out.contains(
        "struct RS_CMD_AllocationData1D_rec {\n    RsAllocation va;\n    uint32_t xoff;\n    \
         uint32_t count;\n    const void * data;\n    size_t data_length;\n};\n"
    ));
    assert!(out.contains("extern RsPlaybackFunc gPlaybackFuncs[11];"));
    assert!(out.contains("void rsp_ContextFinish (Context *, const void *, size_t);\n"));
}

#[test]
fn test_func_decl_header() {
    let out = generate_fixture(Artifact::FuncDeclHeader);
    assert!(out.contains("void rsContextDestroy ();\n"));
    assert!(out.contains("int32_t rsContextGetMessage (RsContext rsc, void * data, size_t data_length);\n"));
    assert!(out.contains("RsType rsAllocationGetType (RsContext rsc, RsAllocation va);\n"));
}

#[test]
fn test_api_source() {
    let out = generate_fixture(Artifact::ApiSource);
    assert!(out.contains("using namespace android;\nusing namespace android::renderscript;\n"));
    // Direct calls are implemented by hand on the client.
    assert!(!out.contains("rsContextDestroy"));
    assert!(out.contains("return rsHCAPI_AllocationGetType(rsc, va);"));
    assert!(out.contains("dataSize += data_length;"));
    assert!(out.contains("io->mToCore.commit(RS_CMD_ID_ScriptInvokeV, size + dataSize);"));
    assert!(out.contains("io->mToCore.commitSync(RS_CMD_ID_ContextGetMessage, size);"));
    assert!(out.contains("io->mToCore.commit(RS_CMD_ID_ContextSetPriority, size);"));
    assert!(out.contains("io->mToCore.commit(RS_CMD_ID_ContextFinish, size);"));
    assert!(out.contains("return reinterpret_cast<RsSampler>(io->mToCoreRet);"));
}

#[test]
fn test_playback_source() {
    let out = generate_fixture(Artifact::PlaybackSource);
    assert!(out.contains("RsPlaybackFunc gPlaybackFuncs[11] = {\n    NULL,\n    NULL,\n    rsp_ContextFinish,\n"));
    assert!(out.contains("con->mIO.mToCoreRet = (intptr_t)rsi_SamplerCreate(con,"));
    assert_eq!(out.matches("Licensed under the Apache License").count(), 1);
}

#[test]
fn test_inline_threshold_option() {
    let dir = TempDir::new().unwrap();
    let selector = selector_file(&dir, "2");
    let output = dir.path().join("rsgApi.cpp");
    let options = GenerateOptions::new()
        .with_spec_file(fixture_spec())
        .with_config(EmitConfig::default().with_inline_threshold(64));
    generate(&selector, &output, &options).unwrap();
    let out = std::fs::read_to_string(&output).unwrap();
    assert!(out.contains("if (dataSize < 64) {"));
    assert!(!out.contains("dataSize < 1024"));
}

#[test]
fn test_bad_selector_leaves_output_alone() {
    let dir = TempDir::new().unwrap();
    let selector = selector_file(&dir, "9");
    let output = dir.path().join("out.h");
    let options = GenerateOptions::new().with_spec_file(fixture_spec());
    let err = generate(&selector, &output, &options).unwrap_err();
    assert!(matches!(err, Error::Artifact(_)));
    assert!(!output.exists());
}

#[test]
fn test_spec_error_leaves_output_alone() {
    let dir = TempDir::new().unwrap();
    let selector = selector_file(&dir, "0");
    let spec = dir.path().join("broken.spec");
    std::fs::write(&spec, "Broken {\n\tparam int32_t\n}\n").unwrap();
    let output = dir.path().join("out.h");
    let err = generate(&selector, &output, &GenerateOptions::new().with_spec_file(&spec))
        .unwrap_err();
    assert!(matches!(err, Error::Spec(_)));
    assert!(!output.exists());
}

#[test]
fn test_binary_reads_spec_from_stdin() {
    let dir = TempDir::new().unwrap();
    let selector = selector_file(&dir, "1\n");
    let output = dir.path().join("rsgApiFuncDecl.h");
    let spec = std::fs::read_to_string(fixture_spec()).unwrap();

    let result = run_rsg(&[&selector, &output], &spec);
    assert_eq!(result.status.code(), Some(0));
    let out = std::fs::read_to_string(&output).unwrap();
    assert!(out.contains("void rsContextFlush (RsContext rsc);\n"));
}

#[test]
fn test_binary_unknown_selector_exits_2() {
    let dir = TempDir::new().unwrap();
    let selector = selector_file(&dir, "x");
    let output = dir.path().join("out.h");

    let result = run_rsg(&[&selector, &output], "");
    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Unknown command: 'x'"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_binary_wrong_argument_count_exits_1() {
    let dir = TempDir::new().unwrap();
    let selector = selector_file(&dir, "0");

    let result = run_rsg(&[&selector], "");
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_binary_spec_error_exits_1() {
    let dir = TempDir::new().unwrap();
    let selector = selector_file(&dir, "3");
    let output = dir.path().join("rsgApiReplay.cpp");

    let result = run_rsg(&[&selector, &output], "Foo {\n\tbogus\n}\n");
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
}

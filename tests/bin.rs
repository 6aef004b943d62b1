use std::io::Write;
use std::process::{Command, Output, Stdio};

use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::{DescriptorProto, FileDescriptorProto, FileOptions};

fn run(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_protoc-gen-go-helpers"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn request(parameter: Option<&str>) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: vec!["foo.proto".to_owned()],
        parameter: parameter.map(str::to_owned),
        proto_file: vec![FileDescriptorProto {
            name: Some("foo.proto".to_owned()),
            message_type: vec![DescriptorProto {
                name: Some("Alpha".to_owned()),
                ..Default::default()
            }],
            options: Some(FileOptions {
                go_package: Some("go.temporal.io/api/foo".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[test]
fn malformed_stdin_exits_with_failure() {
    let output = run(&[0x7a, 0x10, 0x0a]);

    assert_eq!(Some(1), output.status.code());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("protoc-gen-go-helpers: invalid CodeGeneratorRequest"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn writes_one_response_to_stdout() {
    let output = run(&request(None).encode_to_vec());

    assert!(output.status.success());
    let response = CodeGeneratorResponse::decode(output.stdout.as_slice()).unwrap();
    assert_eq!(None, response.error);
    assert_eq!(1, response.file.len());
    assert_eq!("go.temporal.io/api/foo/foo.go-helpers.go", response.file[0].name());
    assert!(response.file[0]
        .content()
        .contains("func (this *Alpha) Equal(that interface{}) bool {"));
}

#[test]
fn generation_errors_are_returned_in_the_response() {
    let output = run(&request(Some("paths=nowhere")).encode_to_vec());

    assert!(output.status.success());
    let response = CodeGeneratorResponse::decode(output.stdout.as_slice()).unwrap();
    assert!(response.file.is_empty());
    assert_eq!(
        Some(r#"unknown path type "nowhere": want "import" or "source_relative""#),
        response.error.as_deref()
    );
}

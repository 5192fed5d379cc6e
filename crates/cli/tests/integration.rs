use serial_test::serial;
use std::path::Path;
use tempfile::TempDir;

const LOG_FILE: &str = "logs/cmake_patch_log.txt";

async fn write_file(path: &Path, content: &str) {
    tokio::fs::create_dir_all(path.parent().unwrap())
        .await
        .unwrap();
    tokio::fs::write(path, content).await.unwrap();
}

async fn read_file(path: &Path) -> String {
    tokio::fs::read_to_string(path).await.unwrap()
}

async fn run_in(dir: &Path, args: &[&str]) -> anyhow::Result<()> {
    let args = std::iter::once("cmakefix")
        .chain(args.iter().copied())
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir).unwrap();
    let result = cmakefix_cli::main(&args).await;
    std::env::set_current_dir(&original_dir).unwrap();
    result
}

#[tokio::test]
#[serial]
async fn test_cli_patch_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join("app/CMakeLists.txt"),
        "cmake_minimum_required(VERSION 2.8)\nproject(app)\n",
    )
    .await;
    write_file(
        &temp_path.join("lib/CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3.8)\nproject(lib)\n",
    )
    .await;

    let result = run_in(temp_path, &[]).await;
    assert!(result.is_ok());

    assert_eq!(
        read_file(&temp_path.join("app/CMakeLists.txt")).await,
        "cmake_minimum_required(VERSION 3.5)\nproject(app)\n"
    );
    assert_eq!(
        read_file(&temp_path.join("lib/CMakeLists.txt")).await,
        "cmake_minimum_required(VERSION 3.8)\nproject(lib)\n"
    );

    let log = read_file(&temp_path.join(LOG_FILE)).await;
    assert_eq!(log.matches("--- CMake Patch Run @ ").count(), 1);
    let logged = log.lines().skip(2).collect::<Vec<_>>();
    assert_eq!(logged, vec!["./app/CMakeLists.txt"]);
}

#[tokio::test]
#[serial]
async fn test_cli_patch_twice_appends_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join("CMakeLists.txt"),
        "cmake_policy(VERSION 3.1)\n",
    )
    .await;

    assert!(run_in(temp_path, &[]).await.is_ok());
    let first = read_file(&temp_path.join(LOG_FILE)).await;

    assert!(run_in(temp_path, &[]).await.is_ok());
    let second = read_file(&temp_path.join(LOG_FILE)).await;

    assert_eq!(first, second);
    assert_eq!(
        read_file(&temp_path.join("CMakeLists.txt")).await,
        "cmake_policy(VERSION 3.5)\n"
    );
}

#[tokio::test]
#[serial]
async fn test_cli_patch_empty_root() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(&temp_path.join("src/main.cpp"), "int main() {}\n").await;

    assert!(run_in(temp_path, &[]).await.is_ok());
    assert!(!temp_path.join("logs").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_patch_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    let result = run_in(temp_path, &["does-not-exist"]).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("root directory does not exist"));
    assert!(!temp_path.join("logs").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_patch_with_flags() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join("tree/CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3.10)\n",
    )
    .await;
    write_file(
        &temp_path.join("tree/build/CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3.10)\n",
    )
    .await;

    let result = run_in(
        temp_path,
        &[
            "tree",
            "--min-version",
            "3.16",
            "--log-dir",
            "out",
            "--log-file",
            "patch.log",
            "--ignore",
            "build",
        ],
    )
    .await;
    assert!(result.is_ok());

    assert_eq!(
        read_file(&temp_path.join("tree/CMakeLists.txt")).await,
        "cmake_minimum_required(VERSION 3.16)\n"
    );
    assert_eq!(
        read_file(&temp_path.join("tree/build/CMakeLists.txt")).await,
        "cmake_minimum_required(VERSION 3.10)\n"
    );
    let log = read_file(&temp_path.join("out/patch.log")).await;
    assert!(log.ends_with("tree/CMakeLists.txt\n"));
}

#[tokio::test]
#[serial]
async fn test_cli_patch_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join(".cmakefix/config.json"),
        r#"{"minVersion": "3.20", "fileName": "Sources.cmake"}"#,
    )
    .await;
    write_file(
        &temp_path.join("Sources.cmake"),
        "cmake_policy(VERSION 3.10)\n",
    )
    .await;
    write_file(
        &temp_path.join("CMakeLists.txt"),
        "cmake_policy(VERSION 3.10)\n",
    )
    .await;

    assert!(run_in(temp_path, &[]).await.is_ok());
    assert_eq!(
        read_file(&temp_path.join("Sources.cmake")).await,
        "cmake_policy(VERSION 3.20)\n"
    );
    assert_eq!(
        read_file(&temp_path.join("CMakeLists.txt")).await,
        "cmake_policy(VERSION 3.10)\n"
    );
}

#[tokio::test]
#[serial]
async fn test_cli_patch_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join("CMakeLists.txt"),
        "cmake_minimum_required(VERSION 2.8)\n",
    )
    .await;

    assert!(run_in(temp_path, &["--dry-run"]).await.is_ok());
    assert_eq!(
        read_file(&temp_path.join("CMakeLists.txt")).await,
        "cmake_minimum_required(VERSION 2.8)\n"
    );
    assert!(!temp_path.join("logs").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_patch_skips_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join("a/CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3..0)\n",
    )
    .await;
    write_file(
        &temp_path.join("b/CMakeLists.txt"),
        "cmake_minimum_required(VERSION 2.8)\n",
    )
    .await;

    assert!(run_in(temp_path, &["--format", "json"]).await.is_ok());
    assert_eq!(
        read_file(&temp_path.join("b/CMakeLists.txt")).await,
        "cmake_minimum_required(VERSION 3.5)\n"
    );
    let log = read_file(&temp_path.join(LOG_FILE)).await;
    assert!(log.ends_with("---\n./b/CMakeLists.txt\n"));
}

#[tokio::test]
#[serial]
async fn test_cli_patch_fail_fast() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join("a/CMakeLists.txt"),
        "cmake_minimum_required(VERSION 2.8)\n",
    )
    .await;
    write_file(
        &temp_path.join("b/CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3..0)\n",
    )
    .await;

    let result = run_in(temp_path, &["--fail-fast"]).await;
    assert!(result.is_err());
    assert_eq!(
        read_file(&temp_path.join("a/CMakeLists.txt")).await,
        "cmake_minimum_required(VERSION 3.5)\n"
    );
    assert!(!temp_path.join("logs").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_check_reports_outdated() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join("CMakeLists.txt"),
        "cmake_minimum_required(VERSION 2.8)\ncmake_policy(VERSION 3.0)\n",
    )
    .await;

    let err = run_in(temp_path, &["check"]).await.unwrap_err();
    let outdated = err
        .downcast_ref::<cmakefix_cli::OutdatedDirectives>()
        .unwrap();
    assert_eq!(outdated.directives, 2);
    assert_eq!(outdated.files, 1);
    assert_eq!(
        read_file(&temp_path.join("CMakeLists.txt")).await,
        "cmake_minimum_required(VERSION 2.8)\ncmake_policy(VERSION 3.0)\n"
    );
    assert!(!temp_path.join("logs").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_check_clean_tree() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    write_file(
        &temp_path.join("CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3.5...3.27)\n",
    )
    .await;

    assert!(run_in(temp_path, &["check", "--format", "json"]).await.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    assert!(run_in(temp_path, &["init"]).await.is_ok());
    let config = read_file(&temp_path.join(".cmakefix/config.json")).await;
    assert!(config.contains(r#""minVersion": "3.5""#));

    // a second init refuses to overwrite
    assert!(run_in(temp_path, &["init"]).await.is_err());
}

#[tokio::test]
#[serial]
async fn test_cli_init_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    assert!(run_in(temp_path, &["init", "--dry-run"]).await.is_ok());
    assert!(!temp_path.join(".cmakefix").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_config() {
    let temp_dir = TempDir::new().unwrap();
    let temp_path = temp_dir.path();

    assert!(run_in(temp_path, &["config", "--min-version", "3.12"]).await.is_ok());
}

//! Test fixtures - fake tools and configs.
//!
//! Every fake tool appends `<argv>|<physical cwd>` to `$SHIPIT_TEST_LOG` and
//! takes its behavior from `FAKE_*` variables.

/// Backend packaging tool
pub const FAKE_MAKE: &str = r#"#!/bin/sh
printf '%s|%s\n' "make $*" "$(pwd -P)" >> "$SHIPIT_TEST_LOG"
exit "${FAKE_FAIL_MAKE:-0}"
"#;

/// Provisioning CLI; outputs come from `FAKE_OUTPUT_<name>`, an unset
/// variable behaves like an undefined output
pub const FAKE_TERRAFORM: &str = r#"#!/bin/sh
printf '%s|%s\n' "terraform $*" "$(pwd -P)" >> "$SHIPIT_TEST_LOG"
case "$1" in
  init)
    exit "${FAKE_FAIL_INIT:-0}"
    ;;
  workspace)
    if [ "$2" = "list" ]; then
      printf '%s\n' "$FAKE_WORKSPACES"
    fi
    exit 0
    ;;
  apply)
    exit "${FAKE_FAIL_APPLY:-0}"
    ;;
  output)
    for name in "$@"; do :; done
    eval "present=\${FAKE_OUTPUT_$name+yes}"
    if [ "$present" != "yes" ]; then
      printf 'Error: Output "%s" not found\n' "$name" >&2
      exit 1
    fi
    eval "printf '%s\n' \"\$FAKE_OUTPUT_$name\""
    exit 0
    ;;
esac
exit 0
"#;

/// Frontend package manager; `run build` produces `<build dir>/index.html`
pub const FAKE_NPM: &str = r#"#!/bin/sh
printf '%s|%s\n' "npm $*" "$(pwd -P)" >> "$SHIPIT_TEST_LOG"
case "$1" in
  install)
    exit "${FAKE_FAIL_NPM_INSTALL:-0}"
    ;;
  run)
    mkdir -p "${FAKE_BUILD_DIR:-out}"
    printf '<html></html>\n' > "${FAKE_BUILD_DIR:-out}/index.html"
    exit "${FAKE_FAIL_NPM_BUILD:-0}"
    ;;
esac
exit 0
"#;

/// Cloud storage CLI
pub const FAKE_AWS: &str = r#"#!/bin/sh
printf '%s|%s\n' "aws $*" "$(pwd -P)" >> "$SHIPIT_TEST_LOG"
exit "${FAKE_FAIL_AWS:-0}"
"#;

pub const FAKE_TOOLS: &[(&str, &str)] = &[
    ("make", FAKE_MAKE),
    ("terraform", FAKE_TERRAFORM),
    ("npm", FAKE_NPM),
    ("aws", FAKE_AWS),
];

/// Config moving every stage directory and renaming the build output
pub const CUSTOM_LAYOUT_CONFIG: &str = r#"
[project]
name = "shop"
environment = "test"

[paths]
backend = "services/api"
infrastructure = "ops/stack"
frontend = "web"

[frontend]
build_dir = "dist"
env_file = ".env.local"
"#;

//! Deploy Use Case
//!
//! Runs the deploy stages in order:
//! 1. Package the backend
//! 2. Init the stack, resolve the workspace, apply
//! 3. Read the outputs later stages depend on
//! 4. Write the frontend env file, build, mirror the build to storage
//! 5. Read the CDN URL and report
//!
//! Every stage enters its directory through the `DirStack` and leaves it when
//! the stage returns, whether it succeeded or not. The first failure aborts
//! the run; completed stages are not rolled back.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::application::outputs::OutputReader;
use crate::domain::entities::DeploySummary;
use crate::domain::ports::{
    CapturedOutput, CommandRunner, DeployEvent, DeployEventSink, Invocation, NoopEventSink,
};
use crate::domain::services::{parse_workspaces, plan_workspace, WorkspaceAction};
use crate::domain::value_objects::Stage;
use crate::error::{ShipError, ShipResult};

use super::dir_stack::DirStack;
use super::options::DeployOptions;

/// Variable the frontend build reads the API endpoint from
pub const API_URL_ENV_KEY: &str = "NEXT_PUBLIC_API_URL";

/// Values read from the stack after apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutputs {
    pub api_url: String,
    pub bucket: String,
    /// Empty when the stack has no custom domain or it could not be read
    pub custom_domain_url: String,
}

/// Deploy use case - sequences the external tools
pub struct DeployUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> DeployUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions, dirs: &mut DirStack) -> ShipResult<DeploySummary> {
        self.execute_with_events(options, dirs, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        dirs: &mut DirStack,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> ShipResult<DeploySummary> {
        let run = Run {
            runner: &self.runner,
            options,
            sink: event_sink.as_ref(),
        };

        run.sink.on_event(DeployEvent::Started {
            environment: options.environment,
            project: options.project_name.clone(),
            root: dirs.root().to_path_buf(),
        });
        tracing::info!(
            environment = %options.environment,
            project = %options.project_name,
            "starting deploy"
        );

        run.stage(Stage::Package, || run.package(dirs))?;
        let workspace = run.stage(Stage::Provision, || run.provision(dirs))?;
        let outputs = run.stage(Stage::Outputs, || run.read_outputs(dirs))?;
        let env_file = run.stage(Stage::Publish, || run.publish(dirs, &outputs))?;
        let cdn_url = run.stage(Stage::Summary, || run.read_cdn_url(dirs))?;

        let summary = DeploySummary {
            environment: options.environment,
            project: options.project_name.clone(),
            workspace,
            api_url: outputs.api_url,
            bucket: outputs.bucket,
            custom_domain_url: Some(outputs.custom_domain_url).filter(|url| !url.is_empty()),
            cdn_url,
            env_file,
        };
        run.sink.on_event(DeployEvent::Completed {
            summary: summary.clone(),
        });
        Ok(summary)
    }
}

/// One deploy run: the collaborators every stage needs
struct Run<'a, R: CommandRunner> {
    runner: &'a R,
    options: &'a DeployOptions,
    sink: &'a dyn DeployEventSink,
}

impl<R: CommandRunner> Run<'_, R> {
    fn stage<T>(&self, stage: Stage, body: impl FnOnce() -> ShipResult<T>) -> ShipResult<T> {
        self.sink.on_event(DeployEvent::StageStarted { stage });
        tracing::info!(%stage, "stage started");
        let started = Instant::now();

        let value = body()?;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::info!(%stage, elapsed_ms, "stage completed");
        self.sink
            .on_event(DeployEvent::StageCompleted { stage, elapsed_ms });
        Ok(value)
    }

    fn announce(&self, stage: Stage, invocation: &Invocation) {
        if self.sink.wants_detailed_events() {
            self.sink.on_event(DeployEvent::CommandStarted {
                stage,
                command_line: invocation.command_line(),
                cwd: invocation.cwd().to_path_buf(),
            });
        }
    }

    fn run(&self, stage: Stage, invocation: Invocation) -> ShipResult<()> {
        self.announce(stage, &invocation);
        self.runner.run(&invocation)
    }

    fn capture(&self, stage: Stage, invocation: Invocation) -> ShipResult<CapturedOutput> {
        self.announce(stage, &invocation);
        self.runner.capture(&invocation)
    }

    fn output_reader(&self) -> OutputReader<'_, R> {
        let provision = &self.options.config.provision;
        OutputReader::new(self.runner, &provision.program, provision.output_format)
    }

    fn read_output(&self, cwd: &Path, name: &str) -> ShipResult<String> {
        let reader = self.output_reader();
        let invocation = reader.invocation(cwd, name);
        self.announce(Stage::Outputs, &invocation);
        let value = reader.read(cwd, name, false)?.value;
        self.sink.on_event(DeployEvent::OutputRead {
            name: name.to_string(),
            value: value.clone(),
        });
        Ok(value)
    }

    fn package(&self, dirs: &mut DirStack) -> ShipResult<()> {
        let config = &self.options.config;
        let scope = dirs.push(&config.paths.backend)?;

        self.run(
            Stage::Package,
            Invocation::new(config.backend.program(), scope.current())
                .args(config.backend.args())
                .failure_message("Backend package build failed"),
        )
    }

    fn provision(&self, dirs: &mut DirStack) -> ShipResult<WorkspaceAction> {
        let config = &self.options.config;
        let scope = dirs.push(&config.paths.infrastructure)?;
        let cwd = scope.current();
        let program = config.provision.program.as_str();

        self.run(
            Stage::Provision,
            Invocation::new(program, cwd)
                .arg("init")
                .failure_message("Provisioning init failed"),
        )?;

        let listing = self.capture(
            Stage::Provision,
            Invocation::new(program, cwd)
                .args(["workspace", "list"])
                .failure_message("Failed to list workspaces"),
        )?;
        let workspaces = parse_workspaces(&listing.stdout);
        let action = plan_workspace(&workspaces, self.options.environment.as_str());
        tracing::debug!(?workspaces, ?action, "resolved workspace");

        let failure = if action.is_create() {
            format!("Failed to create workspace '{}'", action.name())
        } else {
            format!("Failed to select workspace '{}'", action.name())
        };
        self.run(
            Stage::Provision,
            Invocation::new(program, cwd)
                .args(["workspace", action.subcommand(), action.name()])
                .failure_message(failure),
        )?;
        self.sink.on_event(DeployEvent::WorkspaceResolved {
            action: action.clone(),
        });

        self.run(
            Stage::Provision,
            Invocation::new(program, cwd)
                .args(self.options.apply_args())
                .failure_message("Infrastructure apply failed"),
        )?;
        Ok(action)
    }

    fn read_outputs(&self, dirs: &mut DirStack) -> ShipResult<StackOutputs> {
        let names = &self.options.config.outputs;
        let scope = dirs.push(&self.options.config.paths.infrastructure)?;
        let cwd = scope.current();

        let api_url = self.read_output(cwd, &names.api_url)?;
        let bucket = self.read_output(cwd, &names.bucket)?;
        let custom_domain_url = self.read_optional_output(cwd, &names.custom_domain_url);

        Ok(StackOutputs {
            api_url,
            bucket,
            custom_domain_url,
        })
    }

    /// Any failure reading an optional output counts as "no value".
    fn read_optional_output(&self, cwd: &Path, name: &str) -> String {
        let reader = self.output_reader();
        let invocation = reader.invocation(cwd, name);
        self.announce(Stage::Outputs, &invocation);

        match reader.read(cwd, name, true) {
            Ok(output) => {
                self.sink.on_event(DeployEvent::OutputRead {
                    name: name.to_string(),
                    value: output.value.clone(),
                });
                output.value
            }
            Err(err) => {
                tracing::warn!(output = name, error = %err, "optional output unavailable, using empty value");
                self.sink.on_event(DeployEvent::OutputFallback {
                    name: name.to_string(),
                    reason: err.to_string(),
                });
                String::new()
            }
        }
    }

    fn publish(&self, dirs: &mut DirStack, outputs: &StackOutputs) -> ShipResult<PathBuf> {
        let config = &self.options.config;
        let frontend = &config.frontend;
        let scope = dirs.push(&config.paths.frontend)?;
        let cwd = scope.current();

        let env_file = cwd.join(&frontend.env_file);
        write_env_file(&env_file, &outputs.api_url)?;
        self.sink.on_event(DeployEvent::EnvFileWritten {
            path: env_file.clone(),
            key: API_URL_ENV_KEY.to_string(),
        });

        let package_manager = frontend.package_manager.as_str();
        self.run(
            Stage::Publish,
            Invocation::new(package_manager, cwd)
                .arg("install")
                .failure_message("Frontend dependency install failed"),
        )?;
        self.run(
            Stage::Publish,
            Invocation::new(package_manager, cwd)
                .args(["run", "build"])
                .failure_message("Frontend build failed"),
        )?;

        // Mirroring a missing directory with --delete would empty the bucket
        let build_dir = cwd.join(&frontend.build_dir);
        if !build_dir.is_dir() {
            return Err(ShipError::DirectoryNotFound { path: build_dir });
        }

        let target = format!("s3://{}", outputs.bucket);
        self.run(
            Stage::Publish,
            Invocation::new(config.storage.program.as_str(), cwd)
                .args(["s3", "sync"])
                .arg(frontend.build_dir.display().to_string())
                .args([target.as_str(), "--delete"])
                .failure_message(format!("Frontend sync to {target} failed")),
        )?;
        Ok(env_file)
    }

    fn read_cdn_url(&self, dirs: &mut DirStack) -> ShipResult<String> {
        let scope = dirs.push(&self.options.config.paths.infrastructure)?;
        self.read_output(scope.current(), &self.options.config.outputs.cdn_url)
    }
}

/// Write the build-time env file holding the API endpoint
fn write_env_file(path: &Path, api_url: &str) -> ShipResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{API_URL_ENV_KEY}={api_url}\n"))?;
    tracing::debug!(path = %path.display(), "wrote env file");
    Ok(())
}

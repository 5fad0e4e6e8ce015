#[cfg(not(target_arch = "wasm32"))]
pub use native::ThreadRunner;
#[cfg(target_arch = "wasm32")]
pub use web::LocalRunner;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::thread;

    use futures::StreamExt;
    use futures::channel::mpsc::{self, UnboundedSender};

    use crate::api::{Task, TaskRunner};

    /// Runs tasks on a background thread driving a single-threaded tokio
    /// runtime. The thread exits once the runner is dropped.
    #[derive(Debug)]
    pub struct ThreadRunner {
        jobs: UnboundedSender<Task>,
    }

    impl ThreadRunner {
        /// Start the worker. `repaint` is woken after every finished task so
        /// the UI picks up the result without waiting for input.
        pub fn start(repaint: Option<egui::Context>) -> std::io::Result<Self> {
            let (jobs, mut queue) = mpsc::unbounded::<Task>();
            thread::Builder::new()
                .name("storefront-api".to_owned())
                .spawn(move || {
                    let runtime = match tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()
                    {
                        Ok(runtime) => runtime,
                        Err(err) => {
                            log::error!("failed to build api runtime: {}", err);
                            return;
                        }
                    };
                    runtime.block_on(async move {
                        while let Some(task) = queue.next().await {
                            let repaint = repaint.clone();
                            tokio::spawn(async move {
                                task.await;
                                if let Some(ctx) = repaint {
                                    ctx.request_repaint();
                                }
                            });
                        }
                    });
                    log::debug!("api worker stopped");
                })?;
            Ok(Self { jobs })
        }
    }

    impl TaskRunner for ThreadRunner {
        fn spawn(&self, task: Task) {
            if self.jobs.unbounded_send(task).is_err() {
                log::error!("api worker is gone, dropping request");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::api::{Task, TaskRunner};

    /// Runs tasks on the browser's event loop
    #[derive(Debug)]
    pub struct LocalRunner {
        repaint: egui::Context,
    }

    impl LocalRunner {
        pub fn new(repaint: egui::Context) -> Self {
            Self { repaint }
        }
    }

    impl TaskRunner for LocalRunner {
        fn spawn(&self, task: Task) {
            let repaint = self.repaint.clone();
            wasm_bindgen_futures::spawn_local(async move {
                task.await;
                repaint.request_repaint();
            });
        }
    }
}

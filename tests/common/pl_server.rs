use std::process::{Child, Command};

use assert_cmd::prelude::CommandCargoExt;
use pl_server_rs::{config_handler::{Config, TOKEN_ENV_VARS}, status_service::ApiStatusRsp};
use predicates::{function::FnPredicate, Predicate};
use reqwest::{Method, Response};

pub struct PlServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for PlServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl PlServer {
    pub fn new(port: u16) -> PlServer {
        PlServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, external_url: &str, token: Option<&str>) {
        let config = Config {
            port: self.port,
            api_url: external_url.to_string(),
            request_timeout_s: Some(5),
            ..Default::default()
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();

        let mut command = Command::cargo_bin("pl-server-rs").unwrap();
        command.env("CONFIG_PATH", config_path).env_remove("PORT");
        for key in TOKEN_ENV_VARS {
            command.env_remove(key);
        }
        if let Some(token) = token {
            command.env("FOOTBALL_DATA_TOKEN", token);
        }
        self.child_process = Some(command.spawn().expect("should start"));
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://localhost:{}{path}", self.port)
    }

    pub async fn get_status(&self) -> Result<ApiStatusRsp, Box<dyn std::error::Error>> {
        Ok(reqwest::get(self.url("/status")).await?.json().await?)
    }

    pub async fn get(&self, path: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(self.url(path)).await?)
    }

    pub async fn request(&self, method: Method, path: &str, headers: &[(&str, &str)], body: Option<&str>) -> Result<Response, Box<dyn std::error::Error>> {
        let mut req = reqwest::Client::builder()
            .build()?
            .request(method, self.url(path));
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        if let Some(body) = body {
            req = req.body(body.to_string());
        }
        Ok(req.send().await?)
    }

    pub async fn retry_until_up(&self) -> ApiStatusRsp {
        let predicate = predicates::function::function(|e: &ApiStatusRsp| !e.competition.is_empty());
        self.retry_until(predicate, 100).await
    }

    pub async fn retry_until<F>(&self, predicate: FnPredicate<F, ApiStatusRsp>, retry_ms: u64) -> ApiStatusRsp
    where
        F: Fn(&ApiStatusRsp) -> bool,
    {
        let mut nr_loops = 0;
        loop {
            if let Ok(status) = self.get_status().await {
                if predicate.eval(&status) {
                    return status;
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(retry_ms)).await;
            nr_loops += 1;
            if nr_loops > 300 {
                panic!("retry failed");
            }
        }
    }
}

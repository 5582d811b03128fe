use crate::error::ConfigError;
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    // --- 热度搜索 API 配置 ---
    pub search_api_url: String,
    // --- LLM 配置 ---
    /// 缺失时在第一次调用 LLM 时报错，而不是在启动时
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    /// 所有外部请求的超时时间（秒）
    pub request_timeout_secs: u64,
    /// 导出文档的目录
    pub output_dir: String,
    /// 写章节时是否把上一章内容作为上下文传入
    pub chain_chapters: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_api_url: "https://api.example.com/search".to_string(),
            llm_api_key: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4".to_string(),
            llm_temperature: 0.7,
            request_timeout_secs: 60,
            output_dir: ".".to_string(),
            chain_chapters: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源构建配置（便于测试）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        Ok(Self {
            search_api_url: lookup("SEARCH_API_URL").unwrap_or(default.search_api_url),
            llm_api_key: lookup("LLM_API_KEY").filter(|v| !v.trim().is_empty()),
            llm_api_base_url: lookup("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: lookup("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_temperature: parse_var(&lookup, "LLM_TEMPERATURE", "f32")?
                .unwrap_or(default.llm_temperature),
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64")?
                .unwrap_or(default.request_timeout_secs),
            output_dir: lookup("OUTPUT_DIR").unwrap_or(default.output_dir),
            chain_chapters: parse_var(&lookup, "CHAIN_CHAPTERS", "bool")?
                .unwrap_or(default.chain_chapters),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
        })
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

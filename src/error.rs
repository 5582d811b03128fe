use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 搜索 API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 文档生成错误
    #[error("文档错误: {0}")]
    Document(#[from] DocumentError),
    /// 会话状态错误
    #[error("会话错误: {0}")]
    Session(#[from] SessionError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件写入等 IO 错误
    #[error("文件错误 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 交互界面错误
    #[error("交互错误: {0}")]
    Prompt(String),
}

/// 搜索 API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 请求超时
    #[error("API请求超时 ({endpoint})")]
    Timeout { endpoint: String },
    /// API 返回非成功状态码
    #[error("API返回错误响应 ({endpoint}): status={status}")]
    BadResponse { endpoint: String, status: u16 },
    /// JSON 解析失败
    #[error("JSON解析失败: {0}")]
    JsonParseFailed(#[from] serde_json::Error),
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 未配置 API 密钥
    #[error("未配置 LLM API 密钥 (请设置环境变量 LLM_API_KEY)")]
    MissingCredential,
    /// 请求构建失败
    #[error("LLM 请求构建失败: {0}")]
    RequestBuildFailed(String),
    /// API 密钥无效或被拒绝
    #[error("LLM 认证失败 (模型: {model}): {message}")]
    Unauthorized { model: String, message: String },
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {message}")]
    ApiCallFailed { model: String, message: String },
    /// 调用超时
    #[error("LLM API调用超时 (模型: {model}, {secs} 秒)")]
    Timeout { model: String, secs: u64 },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 文档生成错误
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 打包 docx 失败
    #[error("打包 Word 文档失败: {0}")]
    PackFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// 会话状态错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// 大纲中没有任何章节标题
    #[error("生成的大纲为空，没有可写的章节")]
    EmptyOutline,
    /// 尚未生成大纲
    #[error("尚未生成大纲")]
    NoOutline,
    /// 章节标题不在当前大纲中
    #[error("章节不在当前大纲中: {title}")]
    UnknownChapter { title: String },
    /// 章节未全部完成
    #[error("还有 {missing} 个章节未完成，无法导出")]
    ChaptersIncomplete { missing: usize },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件写入错误
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}

impl ApiError {
    /// 根据 reqwest 错误类型区分超时与普通网络错误
    pub fn from_reqwest(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        let endpoint = endpoint.into();
        if source.is_timeout() {
            ApiError::Timeout { endpoint }
        } else {
            ApiError::RequestFailed { endpoint, source }
        }
    }
}

impl From<inquire::InquireError> for AppError {
    fn from(err: inquire::InquireError) -> Self {
        AppError::Prompt(err.to_string())
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

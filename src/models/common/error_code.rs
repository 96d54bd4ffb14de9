/// 业务错误码
///
/// 0 表示成功；1xxx 为请求错误，4xxx 为资源不存在，5xxx 为服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,

    NotFound = 4000,
    GradeNotFound = 4001,
    AssignmentGradeNotFound = 4002,
    TeamNotFound = 4003,
    RepositoryNotFound = 4004,

    InternalServerError = 5000,
    CommentDeliveryFailed = 5001,
}

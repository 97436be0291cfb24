use thiserror::Error;

/// Everything that can go wrong inside one polling cycle.
///
/// Display texts are the user-facing strings relayed to the chat when a
/// failure notification is sent.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("Сервер недоступен, код ответа: {0}")]
    BadHttpStatus(u16),

    #[error("Ошибочный тип полученных данных.")]
    ResponseNotObject,

    #[error("Ключ \"homeworks\" отсутствует в словаре")]
    MissingHomeworksKey,

    #[error("Тип данных не соответствует ожидаемым.")]
    HomeworksNotList,

    #[error("Список домашних работ пуст.")]
    EmptyHomeworksList,

    #[error("Параметр homework_name отсутствует.")]
    MissingHomeworkName,

    #[error("Несуществующий статус проверки работы: {0}")]
    UnknownStatus(String),

    #[error("Ошибка запроса: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Не удалось отправить сообщение: {0}")]
    Notify(String),
}

/// Tag used for duplicate-error suppression: consecutive failures of the
/// same kind produce a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadHttpStatus,
    ResponseNotObject,
    MissingHomeworksKey,
    HomeworksNotList,
    EmptyHomeworksList,
    MissingHomeworkName,
    UnknownStatus,
    Request,
    Notify,
}

impl PollError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PollError::BadHttpStatus(_) => ErrorKind::BadHttpStatus,
            PollError::ResponseNotObject => ErrorKind::ResponseNotObject,
            PollError::MissingHomeworksKey => ErrorKind::MissingHomeworksKey,
            PollError::HomeworksNotList => ErrorKind::HomeworksNotList,
            PollError::EmptyHomeworksList => ErrorKind::EmptyHomeworksList,
            PollError::MissingHomeworkName => ErrorKind::MissingHomeworkName,
            PollError::UnknownStatus(_) => ErrorKind::UnknownStatus,
            PollError::Request(_) => ErrorKind::Request,
            PollError::Notify(_) => ErrorKind::Notify,
        }
    }
}

pub type Result<T> = std::result::Result<T, PollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(
            PollError::BadHttpStatus(500).kind(),
            PollError::BadHttpStatus(404).kind()
        );
        assert_ne!(
            PollError::BadHttpStatus(500).kind(),
            PollError::EmptyHomeworksList.kind()
        );
    }

    #[test]
    fn bad_status_display_carries_code() {
        let err = PollError::BadHttpStatus(503);
        assert_eq!(err.to_string(), "Сервер недоступен, код ответа: 503");
    }
}

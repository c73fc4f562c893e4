use chrono::Utc;
use uuid::Uuid;

use gramsurvey_types::error::ServiceError;
use gramsurvey_types::models::Message;
use gramsurvey_types::requests::NewMessage;

use crate::{MESSAGES_KEY, SurveyService};

impl SurveyService {
    /// Everything in `username`'s inbox and outbox.
    pub fn list_messages(&self, username: &str) -> Vec<Message> {
        self.load::<Message>(MESSAGES_KEY)
            .into_iter()
            .filter(|m| m.from == username || m.to == username)
            .collect()
    }

    pub fn send_message(&self, new: NewMessage) -> Result<Message, ServiceError> {
        let message = Message {
            id: Uuid::new_v4(),
            from: new.from,
            to: new.to,
            subject: new.subject,
            content: new.content,
            timestamp: Utc::now(),
            read: false,
        };

        let mut messages: Vec<Message> = self.load(MESSAGES_KEY);
        messages.push(message.clone());
        self.save(MESSAGES_KEY, &messages)?;
        Ok(message)
    }

    /// Marks a message read. Reports `false` for an unknown id. The flag is
    /// monotonic: marking an already-read message again is a no-op success.
    pub fn mark_read(&self, id: Uuid) -> bool {
        let mut messages: Vec<Message> = self.load(MESSAGES_KEY);
        let Some(message) = messages.iter_mut().find(|m| m.id == id) else {
            return false;
        };

        if message.read {
            return true;
        }
        message.read = true;
        self.save(MESSAGES_KEY, &messages).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use gramsurvey_store::RecordStore;
    use gramsurvey_types::requests::NewMessage;
    use uuid::Uuid;

    use crate::SurveyService;

    fn service() -> SurveyService {
        SurveyService::new(RecordStore::open_in_memory().unwrap())
    }

    fn note(from: &str, to: &str) -> NewMessage {
        NewMessage {
            from: from.into(),
            to: to.into(),
            subject: "hello".into(),
            content: "body".into(),
        }
    }

    #[test]
    fn sent_message_reaches_recipient_unread() {
        let svc = service();
        let sent = svc.send_message(note("a", "b")).unwrap();

        let inbox = svc.list_messages("b");
        let received = inbox.iter().find(|m| m.id == sent.id).unwrap();
        assert!(!received.read);
        assert_eq!(received.subject, "hello");
    }

    #[test]
    fn listing_covers_both_directions() {
        let svc = service();
        svc.send_message(note("a", "b")).unwrap();
        svc.send_message(note("b", "a")).unwrap();

        assert_eq!(svc.list_messages("a").len(), 2);
        assert_eq!(svc.list_messages("b").len(), 2);
        assert!(svc.list_messages("c").is_empty());
    }

    #[test]
    fn mark_read_is_monotonic() {
        let svc = service();
        let sent = svc.send_message(note("a", "b")).unwrap();

        assert!(svc.mark_read(sent.id));
        assert!(svc.mark_read(sent.id));
        let inbox = svc.list_messages("b");
        assert!(inbox.iter().find(|m| m.id == sent.id).unwrap().read);
    }

    #[test]
    fn mark_read_unknown_id_fails() {
        let svc = service();
        assert!(!svc.mark_read(Uuid::new_v4()));
    }
}

use frosty_core::{Conversation, Message, Role};

#[test]
fn fresh_conversation_holds_only_the_greeting() {
    let conversation = Conversation::new();
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation.messages()[0].role, Role::Assistant);
    assert!(!conversation.awaiting_reply());
}

#[test]
fn user_turn_marks_conversation_as_awaiting() {
    let mut conversation = Conversation::new();
    conversation.push(Message::user("how many pets are there?"));
    assert!(conversation.awaiting_reply());
    assert_eq!(conversation.last_role(), Role::User);
}

#[test]
fn assistant_reply_clears_awaiting() {
    let mut conversation = Conversation::new();
    conversation.push(Message::user("hi"));
    conversation.push(Message::assistant("hello"));
    assert!(!conversation.awaiting_reply());
    assert_eq!(conversation.len(), 3);
}

#[test]
fn appends_preserve_order() {
    let mut conversation = Conversation::new();
    conversation.push(Message::user("first"));
    conversation.push(Message::assistant("second"));
    conversation.push(Message::user("third"));
    let contents: Vec<&str> = conversation
        .messages()
        .iter()
        .skip(1)
        .map(|message| message.content.as_str())
        .collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[test]
fn reset_is_a_fresh_instance() {
    let mut conversation = Conversation::new();
    conversation.push(Message::user("hi"));
    conversation.push(Message::assistant("hello"));

    let reset = Conversation::new();
    assert_eq!(reset.len(), 1);
    assert_eq!(reset.messages()[0].role, Role::Assistant);
    assert_ne!(conversation.len(), reset.len());
}

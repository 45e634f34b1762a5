//! Command Dispatcher
//!
//! Maps incoming messages and button presses to handlers. Every update is
//! handled independently; the only shared state is the injected `AppState`.

use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use teloxide::utils::html;
use tracing::{debug, info, warn};

use crate::backend::{BackendClient, LoginOutcome, OrderRoute};
use crate::commands::Command;
use crate::credentials::TokenStore;
use crate::keyboards;
use crate::templates::TemplateCatalog;

/// Shared dependencies injected into every handler
pub struct AppState {
    pub backend: BackendClient,
    pub tokens: Arc<dyn TokenStore>,
    pub catalog: TemplateCatalog,
}

/// Run the bot until shutdown
pub async fn run(bot: Bot, state: AppState) -> anyhow::Result<()> {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    info!("Dispatcher started, waiting for updates");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(state)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    match cmd {
        Command::Start => {
            bot.send_message(chat_id, "Please choose an order type:")
                .reply_markup(keyboards::order_types())
                .await?;
        }
        Command::Help => {
            bot.send_message(chat_id, Command::descriptions().to_string())
                .await?;
        }
        Command::Login(credentials) => {
            let reply = login_reply(&state, chat_id.0, &credentials).await;
            bot.send_message(chat_id, reply).await?;
        }
        Command::Submit(payload) => {
            let reply = submit_reply(&state, chat_id.0, &payload).await;
            bot.send_message(chat_id, reply).await?;
        }
    }

    Ok(())
}

/// Handle an order-type button press: acknowledge the callback and
/// rewrite the message to show the selected template.
async fn handle_callback(bot: Bot, q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    // Answer first to clear the loading indicator
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(order_type) = q.data.as_deref() else {
        return Ok(());
    };

    let text = template_reply(&state.catalog, order_type);

    if let Some(message) = q.message {
        bot.edit_message_text(message.chat.id, message.id, text)
            .parse_mode(ParseMode::Html)
            .await?;
    }

    Ok(())
}

/// Build the reply for `/login <username> <password>`
///
/// On success the token is written to the store before the user is told;
/// every failure is reported as text and never escapes the handler.
pub async fn login_reply(state: &AppState, chat_id: i64, credentials: &str) -> String {
    let args: Vec<&str> = credentials.split_whitespace().collect();
    if args.len() != 2 {
        return "Usage: /login <username> <password>".to_string();
    }
    let (username, password) = (args[0], args[1]);

    match state.backend.login(username, password).await {
        Ok(LoginOutcome::Accepted { access_token }) => {
            match state.tokens.set_token(chat_id, &access_token).await {
                Ok(()) => {
                    info!("Login accepted for chat {}", chat_id);
                    "Logged in successfully!".to_string()
                }
                Err(e) => {
                    warn!("Failed to store token for chat {}: {}", chat_id, e);
                    format!("Login failed. {}", e)
                }
            }
        }
        Ok(LoginOutcome::Rejected) => "Login failed. Please check your credentials.".to_string(),
        Err(e) => {
            warn!("Login error for chat {}: {}", chat_id, e);
            format!("Login failed. {}", e)
        }
    }
}

/// Build the reply for `/submit <json>`
pub async fn submit_reply(state: &AppState, chat_id: i64, payload: &str) -> String {
    let parsed: serde_json::Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(_) => return "Invalid JSON format.".to_string(),
    };

    let token = match state.tokens.token(chat_id).await {
        Ok(Some(token)) if !token.is_empty() => token,
        Ok(_) => return "Please log in first.".to_string(),
        Err(e) => {
            warn!("Token lookup failed for chat {}: {}", chat_id, e);
            return format!("Order submission failed. {}", e);
        }
    };

    let route = OrderRoute::for_payload(&parsed);
    debug!("Routing order from chat {} to {}", chat_id, route.path());

    match state.backend.submit_order(route, &parsed, &token).await {
        Ok(reply) => format!("Response from server: {}", reply.body),
        Err(e) => {
            warn!("Order submission error for chat {}: {}", chat_id, e);
            format!("Order submission failed. {}", e)
        }
    }
}

/// Build the message shown after an order-type button press
pub fn template_reply(catalog: &TemplateCatalog, order_type: &str) -> String {
    format!(
        "Selected order type: {}\n\nJSON template:\n<pre>{}</pre>",
        html::escape(order_type),
        html::escape(&catalog.render(order_type))
    )
}

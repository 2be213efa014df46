use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::utils::ControlWriter;
use crate::session::Session;
use crate::Config;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Mutex as TokioMutex;

use crate::core_ftpcommand::{cwd, list, pass, pwd, quit, syst, type_, user};
use crate::core_network::pasv;

type HandlerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

type CommandHandler = Box<
    dyn Fn(
            ControlWriter,
            Arc<Config>,
            Arc<TokioMutex<Session>>,
            String, // Argument text after the verb
        ) -> HandlerFuture
        + Send
        + Sync,
>;

fn handler<F, Fut>(handle: F) -> Arc<CommandHandler>
where
    F: Fn(ControlWriter, Arc<Config>, Arc<TokioMutex<Session>>, String) -> Fut
        + Send
        + Sync
        + 'static,
    Fut: Future<Output = Result<(), std::io::Error>> + Send + 'static,
{
    let boxed: CommandHandler = Box::new(move |writer, config, session, arg| {
        Box::pin(handle(writer, config, session, arg))
    });
    Arc::new(boxed)
}

pub fn initialize_command_handlers() -> HashMap<FtpCommand, Arc<CommandHandler>> {
    let mut handlers: HashMap<FtpCommand, Arc<CommandHandler>> = HashMap::new();

    handlers.insert(FtpCommand::USER, handler(user::handle_user_command));
    handlers.insert(FtpCommand::PASS, handler(pass::handle_pass_command));
    handlers.insert(FtpCommand::PWD, handler(pwd::handle_pwd_command));
    handlers.insert(FtpCommand::CWD, handler(cwd::handle_cwd_command));
    handlers.insert(FtpCommand::TYPE, handler(type_::handle_type_command));
    handlers.insert(FtpCommand::SYST, handler(syst::handle_syst_command));
    handlers.insert(FtpCommand::PASV, handler(pasv::handle_pasv_command));
    handlers.insert(FtpCommand::LIST, handler(list::handle_list_command));
    handlers.insert(FtpCommand::QUIT, handler(quit::handle_quit_command));

    handlers
}

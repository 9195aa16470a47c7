pub const AD_CREATED_MESSAGE: &str = "Anúncio criado com sucesso!";
pub const AD_FAILED_MESSAGE: &str = "Erro ao criar o anúncio!";

/// Shows a message the user has to acknowledge.
pub trait Notifier {
    fn notify(&self, message: &str);
}

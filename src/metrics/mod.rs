use prometheus::{
    HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Counters for the cliente lifecycle:
// - registrations and lookups (by lookup key)
// - remoção-de-dados workflow outcomes, failures labeled by committed stage
// - write-path operation durations
//
// All metrics are registered with a local Registry and exposed for scraping
// via the service's own /metrics route.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub clientes_criados: IntCounter,
    pub consultas: IntCounterVec,
    pub remocoes_concluidas: IntCounter,
    pub remocoes_falhas: IntCounterVec,
    pub operacao_duracao: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let clientes_criados = IntCounter::new(
            "clientes_criados_total",
            "Total de clientes registrados",
        )?;
        registry.register(Box::new(clientes_criados.clone()))?;

        let consultas = IntCounterVec::new(
            Opts::new("cliente_consultas_total", "Consultas de cliente por chave"),
            &["chave"],
        )?;
        registry.register(Box::new(consultas.clone()))?;

        let remocoes_concluidas = IntCounter::new(
            "remocao_dados_concluidas_total",
            "Fluxos de remoção de dados concluídos",
        )?;
        registry.register(Box::new(remocoes_concluidas.clone()))?;

        let remocoes_falhas = IntCounterVec::new(
            Opts::new(
                "remocao_dados_falhas_total",
                "Fluxos de remoção interrompidos, por última etapa concluída",
            ),
            &["etapa"],
        )?;
        registry.register(Box::new(remocoes_falhas.clone()))?;

        let operacao_duracao = HistogramVec::new(
            HistogramOpts::new("operacao_duracao_segundos", "Duração das operações de escrita")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["operacao"],
        )?;
        registry.register(Box::new(operacao_duracao.clone()))?;

        Ok(Self {
            registry,
            clientes_criados,
            consultas,
            remocoes_concluidas,
            remocoes_falhas,
            operacao_duracao,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_criacao(&self, duration_secs: f64) {
        self.clientes_criados.inc();
        self.operacao_duracao.with_label_values(&["create"]).observe(duration_secs);
    }

    pub fn record_consulta(&self, chave: &str) {
        self.consultas.with_label_values(&[chave]).inc();
    }

    pub fn record_remocao_concluida(&self, duration_secs: f64) {
        self.remocoes_concluidas.inc();
        self.operacao_duracao.with_label_values(&["delete"]).observe(duration_secs);
    }

    pub fn record_remocao_falha(&self, etapa: &str) {
        self.remocoes_falhas.with_label_values(&[etapa]).inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        assert!(metrics.registry.gather().len() > 0);
    }

    #[test]
    fn test_record_criacao() {
        let metrics = Metrics::new().unwrap();
        metrics.record_criacao(0.05);
        metrics.record_criacao(0.02);

        assert_eq!(metrics.clientes_criados.get(), 2);
    }

    #[test]
    fn test_record_consultas_by_chave() {
        let metrics = Metrics::new().unwrap();
        metrics.record_consulta("cpf");
        metrics.record_consulta("cpf");
        metrics.record_consulta("email");

        assert_eq!(metrics.consultas.with_label_values(&["cpf"]).get(), 2);
        assert_eq!(metrics.consultas.with_label_values(&["email"]).get(), 1);
        assert_eq!(metrics.consultas.with_label_values(&["id"]).get(), 0);
    }

    #[test]
    fn test_record_remocao_outcomes() {
        let metrics = Metrics::new().unwrap();
        metrics.record_remocao_concluida(0.1);
        metrics.record_remocao_falha("cliente_removido");

        assert_eq!(metrics.remocoes_concluidas.get(), 1);
        assert_eq!(
            metrics.remocoes_falhas.with_label_values(&["cliente_removido"]).get(),
            1
        );
    }
}

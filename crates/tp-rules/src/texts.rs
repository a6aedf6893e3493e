//! Static legal texts attached to each rule.
//!
//! The five PQR rules append [`SILENCIO_POSITIVO`] to their own prefix.

// ── Descriptions ──────────────────────────────────────────────────────────────

/// Shared explanation of positive administrative silence for PQR filings.
pub const SILENCIO_POSITIVO: &str = "El silencio administrativo positivo en servicios públicos domiciliarios: Se configura automáticamente cuando la empresa no responde una PQR en los 15 días hábiles establecidos. No requiere elevar a escritura pública ni procedimientos especiales. La empresa debe reconocer sus efectos dentro de las 72 horas siguientes al vencimiento del plazo. Si la empresa no reconoce los efectos, el usuario puede solicitar sanciones a la Superintendencia. No opera si hay práctica de pruebas o si el usuario causó la demora.";

/// Filing and decision windows shared by reposición and apelación.
pub const RECURSOS: &str = "El recurso debe presentarse dentro de los 5 días hábiles siguientes a la notificación, contados desde el mismo día en que se accede al documento (solo aplica para correo electrónico). La empresa tiene 15 días hábiles para resolverlo, contados desde el mismo día en que se presenta el recurso, y debe reconocer los efectos del silencio administrativo positivo dentro de las 72 horas siguientes al vencimiento del plazo.";

/// Derecho de petición general.
pub const DESC_PETICION: &str = "El término para responder un derecho de petición general es de 15 días hábiles contados desde el mismo día de presentación.";

/// Petición de información.
pub const DESC_PETICION_INFO: &str = "El término para responder un derecho de petición de información es de 15 días hábiles contados desde el mismo día de presentación.";

/// Consulta.
pub const DESC_CONSULTA: &str = "El término para responder una consulta es de 15 días hábiles contados desde el mismo día de presentación.";

/// Queja administrativa. Mentions the 5-month window for billing claims.
pub const DESC_QUEJA: &str = "El término para responder una queja administrativa es de 15 días hábiles contados desde el mismo día de presentación. La reclamación puede presentarse dentro de los 5 meses siguientes a la entrega de la factura.";

/// Reclamación.
pub const DESC_RECLAMO: &str = "El término para responder una reclamación es de 15 días hábiles contados desde el mismo día de presentación. La reclamación puede presentarse dentro de los 5 meses siguientes a la entrega de la factura.";

/// Recurso de queja, resolved by the Superintendencia.
pub const DESC_RECURSO_QUEJA: &str = "El recurso de queja es un mecanismo facultativo, procede cuando las empresas prestadoras rechazan un recurso de apelación sobre actos de negación, terminación, suspensión, corte o facturación del servicio. Debe interponerse dentro de los cinco días hábiles siguientes a la notificación del rechazo, siendo la Superintendencia de Servicios Públicos quien resuelve en quince días hábiles, plazo que puede suspenderse hasta treinta días por práctica de pruebas. Opera con efecto devolutivo (no suspende automáticamente el acto impugnado), aunque puede solicitarse la suspensión en casos de posible daño irreparable, y su resolución puede confirmar el acto, revocar lo ordenando, revisión de la apelación, o exigir subsanación de defectos procedimentales.";

/// Acción de tutela.
pub const DESC_TUTELA: &str = "La acción de tutela en el ámbito de servicios públicos colombianos constituye un mecanismo de protección que procede cuando la prestación o suspensión de servicios vulnera derechos fundamentales, especialmente en casos de suspensión de servicios esenciales a personas vulnerables, violación al derecho de petición o irregularidades administrativas. Aunque no tiene un término de caducidad específico, se aplica el criterio jurisprudencial de inmediatez con un plazo razonable aproximado de seis meses, resolviendo el juez en máximo diez días hábiles y permitiendo impugnación dentro de los tres días siguientes a la notificación. Sus efectos pueden ser determinantes: desde ordenar la reconexión inmediata de servicios, exigir respuestas de fondo a peticiones, rectificar procedimientos administrativos irregulares, hasta garantizar atención adecuada en canales digitales, siendo particularmente importante para la protección de poblaciones vulnerables.";

/// Nulidad simple. Has no caducidad, so no dates are computed.
pub const DESC_NULIDAD: &str = "La acción de nulidad simple en el contexto de servicios públicos es un mecanismo jurisdiccional que busca preservar la legalidad del ordenamiento jurídico verificando que los actos administrativos se ajusten a las normas vigentes. Procede principalmente contra actos administrativos de carácter general y, excepcionalmente, contra actos particulares cuando no persiga el restablecimiento de un derecho subjetivo, se trate de recuperar bienes públicos, los efectos del acto afecten gravemente el orden público, o la ley lo consagre expresamente.\nLos actos administrativos particulares pueden ser objeto de nulidad simple cuando afectan el interés de la comunidad en casos de grave afectación del orden público, político, económico (como reconocimientos ilegales de prestaciones que generan cargas fiscales insostenibles), social o ecológico. La \"teoría de los móviles y finalidades\" desarrollada por el Consejo de Estado permite esta acción cuando el acto particular compromete un interés comunitario de naturaleza e importancia superior o desborda el ámbito individual al resquebrajar el orden jurídico con proyección sobre el patrimonio nacional. También procede en casos taxativos como la recuperación de bienes de uso público o protección de intereses colectivos reconocidos por leyes especiales.\nEsta acción no está sujeta a término de caducidad, pudiendo interponerse en cualquier momento, y no requiere conciliación previa como requisito de procedibilidad. Puede ser ejercida por cualquier persona, reflejando su carácter público y su objetivo de proteger la legalidad objetiva más allá de intereses particulares, produciendo efectos exclusivamente sobre la restauración del orden jurídico en abstracto.";

/// Nulidad y restablecimiento del derecho (4-month caducidad).
pub const DESC_NULIDAD_RESTABLECIMIENTO: &str = "La acción de nulidad y restablecimiento del derecho en servicios públicos domiciliarios es un mecanismo judicial que permite a los usuarios controvertir actos administrativos que afectan sus derechos, contando con un término general de caducidad de cuatro meses desde la notificación del acto, aunque, excepcionalmente y bajo unas condiciones especificas, para prestaciones periódicas, pueden interponerse en cualquier tiempo. Este proceso requiere conciliación extrajudicial como requisito obligatorio, cuya solicitud suspende el término de caducidad hasta su culminación, ya sea por acuerdo, expedición de constancias o transcurso de tres meses.";

/// Acción de cumplimiento and the renuencia prerequisite.
pub const DESC_CUMPLIMIENTO: &str = "La acción de cumplimiento es un mecanismo constitucional que permite exigir judicialmente el cumplimiento de leyes o actos administrativos, en el ámbito de los servicios públicos domiciliarios. El principal requisito de procedibilidad es la constitución de la renuencia mediante solicitud formal a la autoridad, configurándose cuando esta ratifica su incumplimiento o no responde dentro de diez días hábiles a la solicitud. Este requisito puede omitirse excepcionalmente ante peligro inminente de perjuicio irremediable. La acción debe identificar claramente la norma incumplida con mandato imperativo. No procede cuando el afectado disponga de otro instrumento judicial para lograr el cumplimiento, cuando se busque el cumplimiento de normas que establezcan gastos, o cuando el derecho pueda garantizarse mediante acción de tutela. A diferencia de otros procesos contencioso-administrativos, no es necesario agotar la conciliación.";

// ── Legal grounds ─────────────────────────────────────────────────────────────

/// Ley 142 de 1994, art. 158 (PQR and recursos).
pub const FUND_LEY_142: &str = "Artículo 158 de la Ley 142 de 1994.";

/// Recurso de queja.
pub const FUND_RECURSO_QUEJA: &str = "Ley 142 de 1994 como régimen especial, con aplicación subsidiaria del CPACA (Ley 1437 de 2011).";

/// Acción de tutela.
pub const FUND_TUTELA: &str = "Articulo 86 Constitución Política de Colombia, Decreto 2591 de 1991 que reglamenta la acción de tutela.";

/// Acción de nulidad simple.
pub const FUND_NULIDAD: &str = "Fundamento normativo\n* Código de Procedimiento Administrativo y de lo Contencioso Administrativo (Ley 1437 de 2011)\n* Jurisprudencia del Consejo de Estado, especialmente la \"teoría de móviles y finalidades\"";

/// Nulidad y restablecimiento del derecho.
pub const FUND_NULIDAD_RESTABLECIMIENTO: &str = "CPACA (Ley 1437 de 2011), Art. 138.";

/// Acción de cumplimiento.
pub const FUND_CUMPLIMIENTO: &str = "Ley 393 de 1997.";

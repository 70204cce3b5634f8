//! ReAct agent.
//!
//! [`ReactAgent`] is the concrete [`Agent`]: it pairs one [`LlmGateway`] with
//! a [`ToolExecutorPort`] and runs an explicit, bounded reasoning loop.
//!
//! # Loop
//!
//! ```text
//! for step in 1..=max_steps:
//!   completion = LLM(prompt(question, scratchpad), stop = "\nObservation:")
//!   match parse(completion):
//!     Conclude(answer)       → return answer
//!     Invoke(tool, input)    → observation = tool(input)
//!     Reason / parse error   → observation = format feedback
//!   scratchpad += (completion, observation)
//! → StepLimitExceeded
//! ```
//!
//! The whole loop runs under `tokio::time::timeout`.

use crate::config::AgentParams;
use crate::ports::agent::{Agent, AgentInvocationError};
use crate::ports::agent_progress::{AgentProgressNotifier, NoAgentProgress};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use crate::ports::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use liveqa_domain::react::parsing::MISSING_ACTION_MESSAGE;
use liveqa_domain::util::preview;
use liveqa_domain::{
    Question, ReactPromptTemplate, ReactStep, Scratchpad, ToolCall, ToolDefinition,
    parse_react_output,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Agent that alternates model reasoning with tool calls until it concludes.
pub struct ReactAgent {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    params: AgentParams,
    progress: Arc<dyn AgentProgressNotifier>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ReactAgent {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
        params: AgentParams,
    ) -> Self {
        Self {
            gateway,
            tool_executor,
            params,
            progress: Arc::new(NoAgentProgress),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Report each step to a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn AgentProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &AgentParams {
        &self.params
    }

    async fn run_loop(&self, question: &Question) -> Result<String, AgentInvocationError> {
        let tools: Vec<&ToolDefinition> = self.tool_executor.tool_spec().all().collect();
        let max_steps = self.params.max_steps;
        let mut scratchpad = Scratchpad::new();

        for step in 1..=max_steps {
            self.progress.on_step_start(step, max_steps);

            let prompt =
                ReactPromptTemplate::render(question.content(), &tools, &scratchpad.render());
            let request =
                CompletionRequest::new(prompt).with_stop(ReactPromptTemplate::STOP_SEQUENCES);

            let completion = self.gateway.complete(&request).await?;
            debug!(
                "Step {}/{} completion: {}",
                step,
                max_steps,
                preview(&completion, 200)
            );
            self.conversation_logger.log(ConversationEvent::new(
                "llm_completion",
                serde_json::json!({
                    "model": self.gateway.model().to_string(),
                    "step": step,
                    "text": completion,
                }),
            ));

            let observation = match parse_react_output(&completion) {
                Ok(ReactStep::Conclude { thought, answer }) => {
                    self.report_thought(&thought);
                    return self.conclude(answer, step);
                }
                Ok(ReactStep::Invoke {
                    thought,
                    tool,
                    input,
                }) => {
                    self.report_thought(&thought);
                    self.invoke_tool(&tool, &input, &tools).await
                }
                Ok(ReactStep::Reason { thought }) => {
                    self.report_thought(&thought);
                    debug!("Step {} had no action, sending format feedback", step);
                    self.progress.on_format_error(MISSING_ACTION_MESSAGE);
                    MISSING_ACTION_MESSAGE.to_string()
                }
                Err(e) => {
                    debug!("Step {} could not be parsed: {}", step, e);
                    let message = e.to_string();
                    self.progress.on_format_error(&message);
                    message
                }
            };

            scratchpad.push(completion, observation);
        }

        warn!("Agent exceeded max_steps ({}) without a final answer", max_steps);
        Err(AgentInvocationError::StepLimitExceeded { max_steps })
    }

    fn report_thought(&self, thought: &str) {
        if !thought.is_empty() {
            self.progress.on_thought(thought);
        }
    }

    fn conclude(&self, answer: String, step: usize) -> Result<String, AgentInvocationError> {
        if answer.is_empty() {
            return Err(AgentInvocationError::EmptyAnswer);
        }

        info!("Agent concluded after {} step(s)", step);
        self.progress.on_final_answer(&answer);
        self.conversation_logger.log(ConversationEvent::new(
            "final_answer",
            serde_json::json!({
                "steps": step,
                "bytes": answer.len(),
                "text": answer,
            }),
        ));
        Ok(answer)
    }

    /// Run a tool and return the observation text. Never fails: unknown
    /// tools and tool errors become observations for the model to react to.
    async fn invoke_tool(&self, requested: &str, input: &str, tools: &[&ToolDefinition]) -> String {
        let Some(definition) = self.tool_executor.get_tool(requested) else {
            warn!("Model requested unknown tool '{}'", requested);
            self.progress
                .on_tool_not_found(requested, &self.tool_executor.available_tools());
            return ReactPromptTemplate::invalid_tool(requested, tools);
        };

        let call = ToolCall::new(definition.name.clone(), input);
        self.progress.on_tool_call(&call.tool_name, &call.input);
        self.conversation_logger.log(ConversationEvent::new(
            "tool_call",
            serde_json::json!({
                "tool": call.tool_name,
                "input": call.input,
            }),
        ));

        let result = self.tool_executor.execute(&call).await;

        self.progress.on_tool_result(
            &call.tool_name,
            result.is_success(),
            result.metadata.duration_ms,
        );
        if let Some(error) = result.error() {
            warn!("Tool '{}' failed: {}", call.tool_name, error);
        }

        let observation = result.observation();
        self.conversation_logger.log(ConversationEvent::new(
            "tool_result",
            serde_json::json!({
                "tool": call.tool_name,
                "success": result.is_success(),
                "duration_ms": result.metadata.duration_ms,
                "text": observation,
            }),
        ));
        observation
    }
}

#[async_trait]
impl Agent for ReactAgent {
    async fn answer(&self, question: &Question) -> Result<String, AgentInvocationError> {
        info!("Answering question: {}", preview(question.content(), 100));
        self.conversation_logger.log(ConversationEvent::new(
            "question",
            serde_json::json!({ "text": question.content() }),
        ));

        let timeout = self.params.timeout;
        let result = match tokio::time::timeout(timeout, self.run_loop(question)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Agent timed out after {:?}", timeout);
                Err(AgentInvocationError::Timeout(timeout))
            }
        };

        if let Err(e) = &result {
            self.conversation_logger.log(ConversationEvent::new(
                "agent_error",
                serde_json::json!({
                    "category": e.category().as_str(),
                    "message": e.to_string(),
                }),
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use liveqa_domain::{Model, ToolError, ToolResult, ToolSpec};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    struct ScriptedGateway {
        model: Model,
        completions: Mutex<VecDeque<Result<String, GatewayError>>>,
        prompts: Mutex<Vec<CompletionRequest>>,
        delay: Option<Duration>,
    }

    impl ScriptedGateway {
        fn new(completions: Vec<&str>) -> Self {
            Self {
                model: Model::default(),
                completions: Mutex::new(
                    completions.into_iter().map(|c| Ok(c.to_string())).collect(),
                ),
                prompts: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        fn failing(error: GatewayError) -> Self {
            let gateway = Self::new(vec![]);
            gateway.completions.lock().unwrap().push_back(Err(error));
            gateway
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn prompts(&self) -> Vec<CompletionRequest> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(request.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.completions
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more completions".to_string())))
        }
    }

    struct MockSearch {
        spec: ToolSpec,
        calls: Mutex<Vec<ToolCall>>,
        fail: bool,
    }

    impl MockSearch {
        fn new() -> Self {
            Self {
                spec: ToolSpec::new().register(ToolDefinition::new(
                    "web_search",
                    "Search the web for current events.",
                )),
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn calls(&self) -> Vec<ToolCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ToolExecutorPort for MockSearch {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            self.calls.lock().unwrap().push(call.clone());
            if self.fail {
                ToolResult::failure(
                    &call.tool_name,
                    ToolError::execution_failed("Search request failed: 503"),
                )
            } else {
                ToolResult::success(&call.tool_name, "Mumbai Indians beat CSK by 6 wickets")
            }
        }
    }

    fn question(text: &str) -> Question {
        Question::try_new(text).unwrap()
    }

    fn agent(gateway: Arc<ScriptedGateway>, search: Arc<MockSearch>) -> ReactAgent {
        ReactAgent::new(gateway, search, AgentParams::default())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_direct_final_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            " I know this.\nFinal Answer: Paris",
        ]));
        let search = Arc::new(MockSearch::new());
        let answer = agent(gateway.clone(), search.clone())
            .answer(&question("Capital of France?"))
            .await
            .unwrap();

        assert_eq!(answer, "Paris");
        assert!(search.calls().is_empty());
        assert_eq!(gateway.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_search_then_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            " I need fresh results.\nAction: web_search\nAction Input: IPL result yesterday",
            " I now know the final answer\nFinal Answer: Mumbai Indians won by 6 wickets.",
        ]));
        let search = Arc::new(MockSearch::new());
        let answer = agent(gateway.clone(), search.clone())
            .answer(&question("Who won yesterday's IPL match?"))
            .await
            .unwrap();

        assert_eq!(answer, "Mumbai Indians won by 6 wickets.");
        assert_eq!(
            search.calls(),
            vec![ToolCall::new("web_search", "IPL result yesterday")]
        );

        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].stop, vec!["\nObservation:", "\n\tObservation:"]);
        assert!(prompts[1].prompt.contains(
            "Observation: Mumbai Indians beat CSK by 6 wickets\nThought: "
        ));
    }

    #[tokio::test]
    async fn test_unknown_tool_becomes_observation() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            "Action: calculator\nAction Input: 2+2",
            "Final Answer: 4",
        ]));
        let search = Arc::new(MockSearch::new());
        let answer = agent(gateway.clone(), search.clone())
            .answer(&question("2+2?"))
            .await
            .unwrap();

        assert_eq!(answer, "4");
        assert!(search.calls().is_empty());
        assert!(gateway.prompts()[1].prompt.contains(
            "Observation: calculator is not a valid tool, try one of [web_search]."
        ));
    }

    #[tokio::test]
    async fn test_tool_failure_is_fed_back() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            "Action: web_search\nAction Input: news",
            "Final Answer: I could not search right now.",
        ]));
        let search = Arc::new(MockSearch::failing());
        let answer = agent(gateway.clone(), search)
            .answer(&question("news?"))
            .await
            .unwrap();

        assert_eq!(answer, "I could not search right now.");
        assert!(gateway.prompts()[1]
            .prompt
            .contains("Observation: Error: Search request failed: 503"));
    }

    #[tokio::test]
    async fn test_format_error_is_recovered() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            "Let me think about it some more.",
            "Final Answer: done",
        ]));
        let answer = agent(gateway.clone(), Arc::new(MockSearch::new()))
            .answer(&question("q"))
            .await
            .unwrap();

        assert_eq!(answer, "done");
        assert!(gateway.prompts()[1]
            .prompt
            .contains("Observation: Invalid Format: Missing 'Action:' after 'Thought:'"));
    }

    #[tokio::test]
    async fn test_step_limit() {
        let looping = "Action: web_search\nAction Input: again";
        let gateway = Arc::new(ScriptedGateway::new(vec![looping; 10]));
        let search = Arc::new(MockSearch::new());
        let agent = ReactAgent::new(
            gateway.clone(),
            search.clone(),
            AgentParams::default().with_max_steps(3),
        );

        let err = agent.answer(&question("loop")).await.unwrap_err();
        assert!(matches!(
            err,
            AgentInvocationError::StepLimitExceeded { max_steps: 3 }
        ));
        assert_eq!(gateway.prompts().len(), 3);
        assert_eq!(search.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_timeout_wraps_whole_loop() {
        let gateway = Arc::new(
            ScriptedGateway::new(vec!["Final Answer: too late"])
                .with_delay(Duration::from_millis(500)),
        );
        let agent = ReactAgent::new(
            gateway,
            Arc::new(MockSearch::new()),
            AgentParams::default().with_timeout(Duration::from_millis(20)),
        );

        let err = agent.answer(&question("slow")).await.unwrap_err();
        assert!(matches!(err, AgentInvocationError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let gateway = Arc::new(ScriptedGateway::failing(GatewayError::AuthenticationFailed(
            "API key not valid".to_string(),
        )));
        let err = agent(gateway, Arc::new(MockSearch::new()))
            .answer(&question("q"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AgentInvocationError::Gateway(GatewayError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_final_answer_is_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec!["Final Answer:   "]));
        let err = agent(gateway, Arc::new(MockSearch::new()))
            .answer(&question("q"))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentInvocationError::EmptyAnswer));
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    #[tokio::test]
    async fn test_transcript_events() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            "Action: web_search\nAction Input: x",
            "Final Answer: y",
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let agent = agent(gateway, Arc::new(MockSearch::new()))
            .with_conversation_logger(logger.clone());

        agent.answer(&question("q")).await.unwrap();

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec![
                "question",
                "llm_completion",
                "tool_call",
                "tool_result",
                "llm_completion",
                "final_answer"
            ]
        );
    }
}
